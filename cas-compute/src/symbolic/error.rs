//! The kinds of errors that can occur while manipulating expressions symbolically.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// The expression has no symbolic representation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot manipulate {} symbolically", what),
    labels = ["this expression"],
    help = format!("only {} can be differentiated or simplified", "+ - * / ^ and function calls".fg(EXPR)),
)]
pub struct UnsupportedExpression {
    /// A description of the unsupported expression, such as `an assignment`.
    pub what: &'static str,
}

/// The derivative of the function is not known.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot compute the derivative of the `{}` function", name),
    help = "the derivatives of the trigonometric, hyperbolic, exponential, and logarithmic functions are supported",
)]
pub struct UnsupportedDerivative {
    /// The name of the function.
    pub name: String,
}
