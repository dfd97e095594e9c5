use crate::{
    engine::MathEngine,
    error::Failure,
    normalize::strip_derivative_stopwords,
    question::NormalizedQuestion,
    response::Response,
};

/// The variable derivatives are taken with respect to.
pub const VARIABLE: &str = "x";

/// Differentiates the question with respect to [`VARIABLE`] after removing the derivative
/// stopwords from its matching form, and simplifies the result.
pub fn differentiate<E: MathEngine>(engine: &E, question: &NormalizedQuestion) -> Result<Response, Failure> {
    let text = strip_derivative_stopwords(&question.matching);
    let expr = engine.parse(&text).map_err(|source| Failure::Parse {
        text: text.clone(),
        source,
    })?;
    let derived = engine.derivative(&expr, VARIABLE).map_err(|source| Failure::Differentiation {
        text: text.clone(),
        source,
    })?;

    Ok(Response::derivative(&text, engine.simplify(&derived)))
}

#[cfg(test)]
mod tests {
    use crate::{engine::CasEngine, question::Question};
    use pretty_assertions::assert_eq;
    use super::*;

    fn answer(text: &str) -> Result<Response, Failure> {
        differentiate(&CasEngine, &NormalizedQuestion::from(&Question::new(text)))
    }

    #[test]
    fn polynomial() {
        assert_eq!(
            answer("differentiate 2x^3 + 3x").unwrap().as_str(),
            "The derivative of 2x^3 + 3x is:\n6 * x ^ 2 + 3",
        );
    }

    #[test]
    fn stopwords_and_case() {
        assert_eq!(
            answer("Find the DERIVATIVE of sin(2x) d/dx").unwrap().as_str(),
            "The derivative of sin(2x) is:\n2 * cos(2 * x)",
        );
    }

    #[test]
    fn other_variables_are_constant() {
        assert_eq!(answer("derivative of y^2").unwrap().as_str(), "The derivative of y^2 is:\n0");
    }

    #[test]
    fn constant_expressions() {
        assert_eq!(answer("derivative of 3!").unwrap().as_str(), "The derivative of 3! is:\n0");
        assert_eq!(answer("derivative of 5 % 2").unwrap().as_str(), "The derivative of 5 % 2 is:\n0");
        assert_eq!(
            answer("derivative of x^2 + 3!").unwrap().as_str(),
            "The derivative of x^2 + 3! is:\n2 * x",
        );
    }

    #[test]
    fn failures() {
        assert!(matches!(answer("derivative of (x").unwrap_err(), Failure::Parse { .. }));
        assert!(matches!(answer("derivative of x!").unwrap_err(), Failure::Differentiation { .. }));
        assert!(matches!(
            answer("derivative of floor(x)").unwrap_err(),
            Failure::Differentiation { .. },
        ));
    }
}
