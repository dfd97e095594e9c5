//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// Implementations are usually derived with `cas_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors that do not originate from source code (such as errors produced while manipulating
/// symbolic expressions) have no spans.
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

    /// Creates a new error that does not point at any source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer, using `input` as the source code the
    /// spans refer to.
    pub fn write_report(&self, src_id: &str, input: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct Unbalanced;

    impl ErrorKind for Unbalanced {
        fn message(&self) -> String {
            "unbalanced expression".to_string()
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(self.message());
            builder.add_label(Label::new((src_id, spans[0].clone())).with_message("starts here"));
            builder.finish()
        }
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![0..1], Unbalanced);
        assert_eq!(err.to_string(), "unbalanced expression");
    }

    #[test]
    fn report_mentions_message_and_label() {
        let err = Error::new(vec![3..4], Unbalanced);
        let mut out = Vec::new();
        err.write_report("input", "1 + (2", &mut out).unwrap();

        let out = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(out.contains("unbalanced expression"));
        assert!(out.contains("starts here"));
    }
}
