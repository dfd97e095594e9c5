//! Text preprocessing applied before a question reaches the math capability.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of whitespace.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A digit immediately followed by an ASCII letter, such as `3x`.
static DIGIT_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9])([a-zA-Z])").unwrap());

/// The keywords that request an evaluation.
static EVALUATE_KEYWORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)solve|calculate|evaluate").unwrap());

/// The stopwords removed from a differentiation question.
pub const DERIVATIVE_STOPWORDS: &[&str] = &[
    "find", "the", "derivative", "of", "differentiate", "with", "respect", "to", "d/dx",
];

/// The stopwords removed from an integration question.
pub const INTEGRAL_STOPWORDS: &[&str] = &[
    "find", "the", "integral", "of", "integrate", "with", "respect", "to",
];

/// Prepares the question text for the math capability: all whitespace is removed, and `*` is
/// inserted between a digit and a letter that immediately follows it.
///
/// The substitution is a single pass over the text. Letters next to letters (`xy`) and numbers
/// next to parentheses (`3(x + 1)`) are left as they are.
///
/// ```
/// use cas_assistant::normalize::normalize_for_computation;
///
/// assert_eq!(normalize_for_computation(" 3x^2 + 2 x "), "3*x^2+2*x");
/// ```
pub fn normalize_for_computation(text: &str) -> String {
    let compact = WHITESPACE.replace_all(text.trim(), "");
    DIGIT_LETTER.replace_all(&compact, "${1}*${2}").into_owned()
}

/// Removes every occurrence of `solve`, `calculate`, and `evaluate`, ignoring case, and trims the
/// result.
pub fn strip_evaluate_keywords(text: &str) -> String {
    EVALUATE_KEYWORDS.replace_all(text, "").trim().to_string()
}

/// Builds a case-insensitive pattern matching any of the stopwords, tried in order.
fn stopword_pattern(stopwords: &[&str]) -> Regex {
    let alternatives = stopwords
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)({})", alternatives)).unwrap()
}

static DERIVATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| stopword_pattern(DERIVATIVE_STOPWORDS));

static INTEGRAL_PATTERN: Lazy<Regex> = Lazy::new(|| stopword_pattern(INTEGRAL_STOPWORDS));

/// Removes every occurrence of the [`DERIVATIVE_STOPWORDS`] from the text, ignoring case, and trims
/// the result.
///
/// Stopwords are matched as substrings, not whole words, so `to` is also removed from the middle
/// of `factor`. At each position, the first stopword in the list that matches is removed.
pub fn strip_derivative_stopwords(text: &str) -> String {
    DERIVATIVE_PATTERN.replace_all(text, "").trim().to_string()
}

/// Removes every occurrence of the [`INTEGRAL_STOPWORDS`] from the text, ignoring case, and trims
/// the result.
pub fn strip_integral_stopwords(text: &str) -> String {
    INTEGRAL_PATTERN.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn inserts_multiplication() {
        assert_eq!(normalize_for_computation("2x3y"), "2*x3*y");
        assert_eq!(normalize_for_computation("23ab"), "23*ab");
    }

    #[test]
    fn leaves_other_adjacency() {
        assert_eq!(normalize_for_computation("xy"), "xy");
        assert_eq!(normalize_for_computation("3 (x + 1)"), "3(x+1)");
        assert_eq!(normalize_for_computation("x2"), "x2");
    }

    #[test]
    fn evaluate_keywords() {
        assert_eq!(strip_evaluate_keywords("Solve2+2"), "2+2");
        assert_eq!(strip_evaluate_keywords("calculate 1 evaluate"), "1");
    }

    #[test]
    fn derivative_stopwords() {
        assert_eq!(strip_derivative_stopwords("derivative of x^2"), "x^2");
        assert_eq!(
            strip_derivative_stopwords("find the derivative of sin(x) with respect to x"),
            "sin(x)    x",
        );
        assert_eq!(strip_derivative_stopwords("d/dx x^3"), "x^3");
    }

    #[test]
    fn stopwords_are_substrings() {
        assert_eq!(strip_integral_stopwords("integrate cos(theta)"), "cos(ta)");
        assert_eq!(strip_integral_stopwords("integral of x^2"), "x^2");
    }
}
