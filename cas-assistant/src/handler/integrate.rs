use crate::{
    normalize::strip_integral_stopwords,
    question::NormalizedQuestion,
    response::Response,
};

/// Explains how to integrate the question after removing the integral stopwords from its matching
/// form. No integral is computed, so this never fails.
pub fn integrate(question: &NormalizedQuestion) -> Response {
    Response::integral(&strip_integral_stopwords(&question.matching))
}

#[cfg(test)]
mod tests {
    use crate::question::Question;
    use pretty_assertions::assert_eq;
    use super::*;

    fn answer(text: &str) -> Response {
        integrate(&NormalizedQuestion::from(&Question::new(text)))
    }

    #[test]
    fn power_rule_hint() {
        assert_eq!(
            answer("integral of x^2").as_str(),
            "For the integral of x^2:\n\
            1. This is an indefinite integral\n\
            2. Remember to add + C for the constant of integration\n\
            3. For x^n, the integral is (x^(n+1))/(n+1) + C",
        );
    }

    #[test]
    fn without_power() {
        let response = answer("Integrate 2x");
        assert!(response.as_str().starts_with("For the integral of 2x:\n"));
        assert_eq!(response.as_str().lines().count(), 3);
    }
}
