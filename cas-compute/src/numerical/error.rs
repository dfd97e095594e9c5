//! The kinds of errors that can occur while evaluating an expression.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = format!("to define it, type: {} = {}", name.fg(EXPR), "<expression>".fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "only the builtin functions, such as `sin` or `sqrt`, can be called".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", suggestions[0].fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<&'static str>,
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("too many arguments were given to the `{}` function", name),
    labels = ["this function call", ""],
    help = format!(
        "the signature of the function is {}; there are {} argument(s) provided here",
        signature.fg(EXPR),
        given,
    )
)]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The signature of the function.
    pub signature: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument to a function call is missing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument #{} for the `{}` function", index + 1, name),
    labels = ["this function call", ""],
    help = format!(
        "the signature of the function is {}; there are {} argument(s) provided here",
        signature.fg(EXPR),
        given,
    )
)]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The signature of the function.
    pub signature: String,

    /// The index of the missing argument.
    pub index: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The factorial operator was applied to a value that is not a non-negative integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot compute the factorial of {}", value),
    labels = ["this operand"],
    help = "the factorial is only defined here for non-negative integers",
)]
pub struct InvalidFactorial {
    /// The formatted value of the operand.
    pub value: String,
}
