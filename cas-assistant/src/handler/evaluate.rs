use cas_error::Error;
use crate::{
    engine::MathEngine,
    error::Failure,
    normalize::strip_evaluate_keywords,
    question::NormalizedQuestion,
    response::Response,
};
use tracing::debug;

/// Parses and evaluates the text.
fn compute<E: MathEngine>(engine: &E, text: &str) -> Result<f64, Error> {
    let expr = engine.parse(text)?;
    engine.evaluate(&expr)
}

/// Checks if the text is an equation with two sides that parse.
///
/// Text that does not split into exactly two sides around `=` gets an empty response.
fn equation<E: MathEngine>(engine: &E, text: &str) -> Result<Response, Failure> {
    let sides = text.split('=').collect::<Vec<_>>();
    let [lhs, rhs] = sides.as_slice() else {
        debug!(sides = sides.len(), "not an equation, leaving the response empty");
        return Ok(Response::empty());
    };

    for side in [lhs, rhs] {
        engine.parse(side).map_err(|source| Failure::Parse {
            text: side.to_string(),
            source,
        })?;
    }

    Ok(Response::equation_hint())
}

/// Evaluates the question after removing the `solve`, `calculate`, and `evaluate` keywords from
/// its computation form.
///
/// If evaluation fails, the computation form (with the keywords still in place) is checked for an
/// equation instead.
pub fn evaluate<E: MathEngine>(engine: &E, question: &NormalizedQuestion) -> Result<Response, Failure> {
    let text = strip_evaluate_keywords(&question.computation);
    match compute(engine, &text) {
        Ok(value) => Ok(Response::result(value)),
        Err(err) => {
            debug!(%text, error = %err, "evaluation failed, checking for an equation");
            equation(engine, &question.computation)
        },
    }
}
