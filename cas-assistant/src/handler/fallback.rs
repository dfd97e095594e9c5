use crate::{
    engine::MathEngine,
    error::Failure,
    question::NormalizedQuestion,
    response::Response,
};

/// Evaluates the computation form of a question that matched no keyword.
pub fn fallback<E: MathEngine>(engine: &E, question: &NormalizedQuestion) -> Result<Response, Failure> {
    let text = &question.computation;
    engine.parse(text)
        .and_then(|expr| engine.evaluate(&expr))
        .map(Response::result)
        .map_err(|source| Failure::Unclassified {
            text: text.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use crate::{engine::CasEngine, question::Question};
    use pretty_assertions::assert_eq;
    use super::*;

    fn answer(text: &str) -> Result<Response, Failure> {
        fallback(&CasEngine, &NormalizedQuestion::from(&Question::new(text)))
    }

    #[test]
    fn bare_expressions() {
        assert_eq!(answer("2 + 2").unwrap().as_str(), "The result is: 4");
        assert_eq!(answer("3 * 4").unwrap().as_str(), "The result is: 12");
        assert_eq!(answer("1 / 0").unwrap().as_str(), "The result is: Infinity");
        assert_eq!(answer("2pi").unwrap().as_str(), "The result is: 6.283185307179586");
    }

    #[test]
    fn garbage() {
        let failure = answer("asdkjaskjd").unwrap_err();
        assert!(matches!(failure, Failure::Unclassified { .. }));
        assert_eq!(failure.text(), "asdkjaskjd");
        assert_eq!(failure.cause().to_string(), "`asdkjaskjd` is not defined");
    }

    #[test]
    fn parse_and_evaluation_failures_are_unclassified() {
        for text in ["1 +", "y + 1", "(-1)!"] {
            assert!(matches!(answer(text).unwrap_err(), Failure::Unclassified { .. }), "for {text:?}");
        }
    }
}
