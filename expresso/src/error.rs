use ariadne::Fmt;
use expresso_attrs::ErrorKind;
use expresso_error::{Error as ReportError, ErrorKind, EXPR};
use std::{fmt, io};

/// The variable to differentiate with respect to is not a valid variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid variable `{}`", name),
    labels = ["this is not a variable"],
    help = format!("{} are made of one or more letters, like {}", "variables".fg(EXPR), "`x`".fg(EXPR)),
)]
pub struct InvalidVariableName {
    /// The text that was given as the variable.
    pub name: String,
}

/// Builds a report error spanning the whole of the given variable text.
fn invalid_variable(variable: &str) -> ReportError {
    ReportError::new(vec![0..variable.len()], InvalidVariableName { name: variable.to_owned() })
}

/// Utility enum to package the errors that can occur while handling user input.
#[derive(Debug)]
pub enum Error {
    /// The input is not a valid expression.
    InvalidInput {
        /// The input that failed to parse.
        input: String,

        /// The syntax error, with spans into `input`.
        error: ReportError,
    },

    /// The variable to differentiate with respect to is not a valid variable name.
    InvalidVariable {
        /// The text that was given as the variable.
        variable: String,
    },

    /// A console command could not be run.
    Command {
        /// The console input containing the command.
        input: String,

        /// The reason the command could not be run, with spans into `input`.
        error: ReportError,
    },
}

impl Error {
    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str) -> io::Result<()> {
        match self {
            Self::InvalidInput { input, error } | Self::Command { input, error } => {
                error.report_to_stderr(src_id, input)
            },
            Self::InvalidVariable { variable } => {
                invalid_variable(variable).report_to_stderr(src_id, variable)
            },
        }
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, writer: impl io::Write) -> io::Result<()> {
        match self {
            Self::InvalidInput { input, error } | Self::Command { input, error } => {
                error.write_report(src_id, input, writer)
            },
            Self::InvalidVariable { variable } => {
                invalid_variable(variable).write_report(src_id, variable, writer)
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { input, error } => write!(f, "invalid input `{}`: {}", input, error),
            Self::InvalidVariable { variable } => write!(f, "invalid variable `{}`", variable),
            Self::Command { error, .. } => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput { error, .. } | Self::Command { error, .. } => Some(error),
            Self::InvalidVariable { .. } => None,
        }
    }
}
