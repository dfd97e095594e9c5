use thiserror::Error;

/// A question that could not be answered.
///
/// Every failure is shown to the user as the same [`HELP`](crate::response::HELP) message. The
/// variants keep the text given to the math capability and its error, so that a caller can report
/// what went wrong.
#[derive(Debug, Error)]
pub enum Failure {
    /// The text could not be parsed as an expression.
    #[error("could not parse `{text}`: {source}")]
    Parse {
        text: String,
        source: cas_error::Error,
    },

    /// The expression parsed, but could not be differentiated.
    #[error("could not differentiate `{text}`: {source}")]
    Differentiation {
        text: String,
        source: cas_error::Error,
    },

    /// No keyword matched, and the text could not be evaluated as an expression.
    #[error("`{text}` is not a recognized question: {source}")]
    Unclassified {
        text: String,
        source: cas_error::Error,
    },
}

impl Failure {
    /// The text that was given to the math capability.
    pub fn text(&self) -> &str {
        match self {
            Failure::Parse { text, .. }
            | Failure::Differentiation { text, .. }
            | Failure::Unclassified { text, .. } => text,
        }
    }

    /// The error reported by the math capability.
    pub fn cause(&self) -> &cas_error::Error {
        match self {
            Failure::Parse { source, .. }
            | Failure::Differentiation { source, .. }
            | Failure::Unclassified { source, .. } => source,
        }
    }
}
