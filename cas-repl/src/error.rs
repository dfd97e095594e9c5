use cas_assistant::Failure;
use std::io;

/// Reports the error behind a failure to stderr, as an `ariadne` report against the text that was
/// given to the math capability.
///
/// Errors without spans, such as unsupported derivatives, are reported with their message only.
pub fn report_to_stderr(failure: &Failure) -> io::Result<()> {
    failure.cause().report_to_stderr("input", failure.text())
}
