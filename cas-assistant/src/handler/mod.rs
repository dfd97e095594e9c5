//! The handlers that answer a question once its [`Intent`] is known.
//!
//! Handlers return their [`Response`] to the caller and keep no state of their own.

pub mod differentiate;
pub mod evaluate;
pub mod fallback;
pub mod integrate;

use crate::{
    engine::MathEngine,
    error::Failure,
    intent::Intent,
    question::NormalizedQuestion,
    response::Response,
};

pub use differentiate::differentiate;
pub use evaluate::evaluate;
pub use fallback::fallback;
pub use integrate::integrate;

/// Answers the question with the handler for the given intent.
pub fn dispatch<E: MathEngine>(
    engine: &E,
    intent: Intent,
    question: &NormalizedQuestion,
) -> Result<Response, Failure> {
    match intent {
        Intent::Evaluate => evaluate(engine, question),
        Intent::Differentiate => differentiate(engine, question),
        Intent::Integrate => Ok(integrate(question)),
        Intent::Fallback => fallback(engine, question),
    }
}
