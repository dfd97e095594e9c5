//! Symbolic derivatives of the builtin functions.

use cas_error::Error;
use crate::symbolic::{error::UnsupportedDerivative, expr::SymExpr};
use super::{derivative, MultBuilder};

fn call(name: &str, arg: &SymExpr) -> SymExpr {
    SymExpr::call(name, vec![arg.clone()])
}

fn squared(expr: SymExpr) -> SymExpr {
    SymExpr::pow(expr, SymExpr::num(2.0))
}

/// `1 + sign * u ^ 2`, used by the inverse trigonometric functions.
fn one_plus_square(sign: f64, u: &SymExpr) -> SymExpr {
    SymExpr::num(1.0) + SymExpr::num(sign) * squared(u.clone())
}

fn unsupported(func: &str) -> Error {
    Error::unspanned(UnsupportedDerivative { name: func.to_string() })
}

/// Computes the derivative of a builtin function call and applies the chain rule.
pub(super) fn function_derivative(func: &str, args: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let mut mult_group = MultBuilder::default();

    let u = match (func, args) {
        ("sqrt", [u]) => {
            return derivative(&SymExpr::pow(u.clone(), SymExpr::num(0.5)), with);
        },
        // change of base: `log(u, b) = log(u) / log(b)`
        ("log", [u, base]) if !base.depends_on(with) => {
            mult_group.mult(derivative(u, with)?);
            mult_group.mult(u.clone().recip());
            mult_group.mult(call("log", base).recip());
            return Ok(mult_group.into());
        },
        (_, [u]) => u,
        _ => return Err(unsupported(func)),
    };

    mult_group.mult(derivative(u, with)?);
    match func {
        "sin" => mult_group.mult(call("cos", u)),
        "cos" => {
            mult_group.mult(SymExpr::num(-1.0));
            mult_group.mult(call("sin", u));
        },
        "tan" => mult_group.mult(squared(call("sec", u))),
        "sec" => {
            mult_group.mult(call("sec", u));
            mult_group.mult(call("tan", u));
        },
        "csc" => {
            mult_group.mult(SymExpr::num(-1.0));
            mult_group.mult(call("csc", u));
            mult_group.mult(call("cot", u));
        },
        "cot" => {
            mult_group.mult(SymExpr::num(-1.0));
            mult_group.mult(squared(call("csc", u)));
        },
        "asin" => mult_group.mult(SymExpr::pow(one_plus_square(-1.0, u), SymExpr::num(-0.5))),
        "acos" => {
            mult_group.mult(SymExpr::num(-1.0));
            mult_group.mult(SymExpr::pow(one_plus_square(-1.0, u), SymExpr::num(-0.5)));
        },
        "atan" => mult_group.mult(one_plus_square(1.0, u).recip()),
        "sinh" => mult_group.mult(call("cosh", u)),
        "cosh" => mult_group.mult(call("sinh", u)),
        "tanh" => mult_group.mult(SymExpr::pow(call("cosh", u), SymExpr::num(-2.0))),
        "exp" => mult_group.mult(call("exp", u)),
        "log" => mult_group.mult(u.clone().recip()),
        _ => return Err(unsupported(func)),
    }

    Ok(mult_group.into())
}
