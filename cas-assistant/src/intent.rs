//! Classification of questions by keyword.

use std::fmt;

/// What the user wants done with their question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Compute the numeric value of an expression.
    Evaluate,

    /// Compute the derivative of an expression with respect to `x`.
    Differentiate,

    /// Explain how to integrate an expression.
    Integrate,

    /// No keyword matched; the question is evaluated as a bare expression.
    Fallback,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Evaluate => write!(f, "evaluate"),
            Intent::Differentiate => write!(f, "differentiate"),
            Intent::Integrate => write!(f, "integrate"),
            Intent::Fallback => write!(f, "fallback"),
        }
    }
}

/// The classification rules, in priority order. The first rule with a keyword contained in the
/// question decides the intent.
pub const RULES: &[(&[&str], Intent)] = &[
    (&["solve", "calculate", "evaluate"], Intent::Evaluate),
    (&["derivative", "differentiate"], Intent::Differentiate),
    (&["integral", "integrate"], Intent::Integrate),
];

/// Classifies the question by the keywords it contains.
///
/// The question is trimmed and lower-cased before matching, and keywords match anywhere in the
/// text, including inside other words.
///
/// ```
/// use cas_assistant::intent::{classify, Intent};
///
/// assert_eq!(classify("Derivative of x^2"), Intent::Differentiate);
/// assert_eq!(classify("solve the integral of x"), Intent::Evaluate);
/// assert_eq!(classify("2 + 2"), Intent::Fallback);
/// ```
pub fn classify(question: &str) -> Intent {
    let question = question.trim().to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| question.contains(*keyword)))
        .map_or(Intent::Fallback, |(_, intent)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_intent() {
        assert_eq!(classify("calculate 3 * 4"), Intent::Evaluate);
        assert_eq!(classify("differentiate 2x^3 + 3x"), Intent::Differentiate);
        assert_eq!(classify("integrate 2x"), Intent::Integrate);
        assert_eq!(classify("sin(pi)"), Intent::Fallback);
    }

    #[test]
    fn priority_order() {
        assert_eq!(classify("evaluate the derivative of x"), Intent::Evaluate);
        assert_eq!(classify("derivative of the integral"), Intent::Differentiate);
    }

    #[test]
    fn case_and_substrings() {
        assert_eq!(classify("  INTEGRAL of x  "), Intent::Integrate);
        assert_eq!(classify("resolved"), Intent::Evaluate);
    }

    #[test]
    fn deterministic() {
        for question in ["2 + 2", "derivative of x^2", "integral of x^2", "asdkjaskjd"] {
            assert_eq!(classify(question), classify(question));
        }
    }
}
