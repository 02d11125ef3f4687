//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Error kinds are usually not implemented by hand; the `expresso-attrs` crate provides a derive
//! macro that generates the [`ErrorKind::message`], [`ErrorKind::labels`], and
//! [`ErrorKind::help`] methods from an `#[error(...)]` attribute.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::{self, Debug}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// The text of the labels that point to the spans of the error, in the same order as the
    /// spans. A label may be empty, in which case the span is highlighted without a message.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional help text, describing what the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let labels = self.labels();
        let offset = spans.first().map_or(0, |span| span.start);

        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(
                spans
                    .iter()
                    .enumerate()
                    .map(|(i, span)| {
                        let mut label = Label::new((src_id, span.clone()))
                            .with_color(EXPR);

                        if let Some(text) = labels.get(i).filter(|text| !text.is_empty()) {
                            label = label.with_message(text);
                        }

                        label
                    })
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the spans of the given source.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so this
    /// goes through its `eprint` method.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, input: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
