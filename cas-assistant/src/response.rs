//! The canned texts and templates the assistant responds with.

use cas_compute::numerical::fmt::fmt_number;
use std::fmt;

/// Shown when the question is blank.
pub const BLANK_PROMPT: &str = "Please enter a mathematical expression or question.";

/// Shown when an evaluation fails but the question looks like an equation.
pub const EQUATION_HINT: &str = "This is an equation. Try rearranging it to standard form.";

/// Shown whenever a question cannot be answered.
pub const HELP: &str = "I can help you with these types of questions:

1. Derivatives:
   - 'derivative of x^2'
   - 'differentiate 2x^3 + 3x'

2. Basic Calculations:
   - '2 + 2'
   - '3 * 4'

3. Expressions:
   - 'solve 3x^2 when x = 2'
   - 'evaluate 2x + 3 when x = 4'

4. Integrals:
   - 'integral of x^2'
   - 'integrate 2x'

Please use proper mathematical notation:
- Multiplication: 2*x or 2x
- Powers: x^2 or x^3
- Addition/Subtraction: + or -";

/// The introduction shown before the first question.
pub const GREETING: &str = "Ask me to solve math problems! Try these:";

/// Example questions listed after the [`GREETING`].
pub const EXAMPLES: &[&str] = &[
    "derivative of x^2",
    "solve 2 + 2",
    "evaluate 3x^2 when x = 2",
    "integral of x^2",
];

/// The text shown to the user after a submission. It may be empty, in which case nothing should
/// be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response(String);

impl Response {
    /// A response with no text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The prompt for a blank question.
    pub fn blank_prompt() -> Self {
        Self(BLANK_PROMPT.to_string())
    }

    /// The help message every failure collapses to.
    pub fn help() -> Self {
        Self(HELP.to_string())
    }

    /// The hint given for equations.
    pub fn equation_hint() -> Self {
        Self(EQUATION_HINT.to_string())
    }

    /// The numeric result of an evaluation.
    pub fn result(value: f64) -> Self {
        Self(format!("The result is: {}", fmt_number(value)))
    }

    /// The derivative of the expression.
    pub fn derivative(expr: &str, derived: impl fmt::Display) -> Self {
        Self(format!("The derivative of {} is:\n{}", expr, derived))
    }

    /// Pointers on integrating the expression. A reminder of the power rule is added if the
    /// expression contains `x^`.
    pub fn integral(expr: &str) -> Self {
        let mut text = format!(
            "For the integral of {}:\n\
            1. This is an indefinite integral\n\
            2. Remember to add + C for the constant of integration",
            expr,
        );
        if expr.contains("x^") {
            text.push_str("\n3. For x^n, the integral is (x^(n+1))/(n+1) + C");
        }
        Self(text)
    }

    /// Returns the text of the response.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the response has no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn integral_template() {
        assert_eq!(
            Response::integral("2*x").as_str(),
            "For the integral of 2*x:\n1. This is an indefinite integral\n2. Remember to add + C for the constant of integration",
        );
        assert_eq!(Response::integral("x^3").as_str().lines().count(), 4);
    }

    #[test]
    fn results() {
        assert_eq!(Response::result(0.1 + 0.2).as_str(), "The result is: 0.30000000000000004");
        assert_eq!(Response::derivative("x^2", "2 * x").as_str(), "The derivative of x^2 is:\n2 * x");
    }
}
