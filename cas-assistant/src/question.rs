//! The submitted question and the forms derived from it.

use crate::normalize::normalize_for_computation;

/// The raw text of a submitted question, exactly as the user entered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Creates a question from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw text of the question.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the question is empty or only contains whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// The two normalized forms of a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestion {
    /// The trimmed, lower-cased text. Keywords are matched against this form, and the
    /// differentiate and integrate handlers strip their stopwords from it.
    pub matching: String,

    /// The text with all whitespace removed and explicit multiplication inserted between a digit
    /// and a letter. The evaluate and fallback handlers compute with this form.
    pub computation: String,
}

impl From<&Question> for NormalizedQuestion {
    fn from(question: &Question) -> Self {
        Self {
            matching: question.as_str().to_lowercase().trim().to_string(),
            computation: normalize_for_computation(question.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn blank_questions() {
        assert!(Question::new("").is_blank());
        assert!(Question::new(" \t\n ").is_blank());
        assert!(!Question::new(" 2 ").is_blank());
    }

    #[test]
    fn both_forms() {
        let normalized = NormalizedQuestion::from(&Question::new("  Evaluate 3X + 1 "));
        assert_eq!(normalized, NormalizedQuestion {
            matching: "evaluate 3x + 1".to_string(),
            computation: "Evaluate3*X+1".to_string(),
        });
    }
}
