//! The console behind the `expresso` binary.
//!
//! Each line of console input is either an expression or a command:
//!
//! - an expression is parsed and becomes the current expression;
//! - `!simplify` simplifies the current expression;
//! - `!d/d<var>` differentiates the current expression with respect to `<var>`.
//!
//! The result of a command also becomes the current expression, so commands can be chained:
//!
//! ```
//! use expresso::repl::Console;
//!
//! let mut console = Console::new();
//! assert_eq!(console.execute("x * (x + 2)").unwrap().to_string(), "x * (x + 2)");
//! assert_eq!(console.execute("!d/dx").unwrap().to_string(), "2 * x + 2");
//! assert_eq!(console.execute("!d/dx").unwrap().to_string(), "2");
//! ```

use ariadne::Fmt;
use expresso_attrs::ErrorKind;
use expresso_compute::symbolic::{differentiate, simplify, Expression, Variable};
use expresso_error::{Error as ReportError, ErrorKind, EXPR};
use std::ops::Range;
use tracing::debug;
use crate::error::{Error, InvalidVariableName};

/// A command was given before any expression was entered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no expression to work on",
    labels = ["this command needs an expression"],
    help = format!("enter an {} first, like {}", "expression".fg(EXPR), "`x * x + 1`".fg(EXPR)),
)]
pub struct NoCurrentExpression;

/// The command is not one the console knows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `!{}`", name),
    labels = ["this command"],
    help = format!("the commands are {} and {}", "`!simplify`".fg(EXPR), "`!d/d<variable>`".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The name of the command, without the leading `!`.
    pub name: String,
}

/// A console command, written with a leading `!`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `!simplify`: simplify the current expression.
    Simplify,

    /// `!d/d<var>`: differentiate the current expression with respect to the variable.
    Differentiate(Variable),
}

impl Command {
    /// Parses a command from a line of console input.
    ///
    /// Returns [`None`] if the line is not a command, and an error with spans into the line if it
    /// is a command that cannot be run.
    pub fn parse(input: &str) -> Option<Result<Self, ReportError>> {
        let start = input.len() - input.trim_start().len();
        let name = input.trim().strip_prefix('!')?;
        let name_start = start + 1;
        let end = name_start + name.len();

        let command = if name == "simplify" {
            Ok(Self::Simplify)
        } else if let Some(variable) = name.strip_prefix("d/d") {
            Variable::try_new(variable)
                .map(Self::Differentiate)
                .ok_or_else(|| ReportError::new(
                    vec![name_start + 3..end],
                    InvalidVariableName { name: variable.to_owned() },
                ))
        } else {
            Err(ReportError::new(vec![start..end], UnknownCommand { name: name.to_owned() }))
        };
        Some(command)
    }

    /// Runs the command on the given expression.
    pub fn run(&self, expr: &Expression) -> Expression {
        match self {
            Self::Simplify => simplify(&expr.expand()),
            Self::Differentiate(variable) => differentiate(&simplify(&expr.expand()), variable),
        }
    }
}

/// Console state: the current expression, if any.
#[derive(Debug, Clone, Default)]
pub struct Console {
    current: Option<Expression>,
}

impl Console {
    /// Creates a console with no current expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current expression.
    pub fn current(&self) -> Option<&Expression> {
        self.current.as_ref()
    }

    /// Executes one line of console input, returning the new current expression.
    ///
    /// On error, the current expression is left unchanged.
    pub fn execute(&mut self, input: &str) -> Result<&Expression, Error> {
        let command_error = |error| Error::Command { input: input.to_owned(), error };

        let result = match Command::parse(input) {
            Some(command) => {
                let command = command.map_err(command_error)?;
                let current = self.current.as_ref()
                    .ok_or_else(|| command_error(ReportError::new(
                        vec![command_span(input)],
                        NoCurrentExpression,
                    )))?;
                debug!(?command, %current, "running command");
                command.run(current)
            },
            None => crate::parse(input)?,
        };

        Ok(self.current.insert(result))
    }
}

/// Returns the span of the command in the input, excluding surrounding whitespace.
fn command_span(input: &str) -> Range<usize> {
    let start = input.len() - input.trim_start().len();
    start..start + input.trim().len()
}
