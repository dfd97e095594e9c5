//! Conventional formatting of [`SymExpr`]s.
//!
//! Operators are surrounded by spaces (`x ^ 2 + 1`). Terms with a negative coefficient are
//! written as subtractions, and factors with a negative numeric exponent are moved into the
//! denominator of a fraction.

use crate::numerical::fmt::fmt_number;
use std::fmt::{self, Display, Formatter};
use super::{Primary, SymExpr};

impl Display for Primary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Primary::Number(n) => write!(f, "{}", fmt_number(*n)),
            Primary::Symbol(name) => write!(f, "{}", name),
            Primary::Call(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Writes the expression, wrapped in parentheses if it is a sum or product.
fn fmt_grouped(f: &mut Formatter<'_>, expr: &SymExpr) -> fmt::Result {
    match expr {
        SymExpr::Add(_) | SymExpr::Mul(_) => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

/// Writes the factors joined with `*`.
fn fmt_factors(f: &mut Formatter<'_>, factors: &[SymExpr]) -> fmt::Result {
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            write!(f, " * ")?;
        }
        fmt_grouped(f, factor)?;
    }
    Ok(())
}

/// If the factor is a power with a negative numeric exponent, returns the factor that belongs in
/// the denominator.
fn denominator_factor(factor: &SymExpr) -> Option<SymExpr> {
    let SymExpr::Exp(base, exp) = factor else {
        return None;
    };
    let n = exp.as_number().filter(|n| *n < 0.0)?;
    if n == -1.0 {
        Some((**base).clone())
    } else {
        Some(SymExpr::pow((**base).clone(), SymExpr::num(-n)))
    }
}

/// Writes a product, moving factors with negative exponents into the denominator.
fn fmt_product(f: &mut Formatter<'_>, factors: &[SymExpr]) -> fmt::Result {
    let mut numer = Vec::new();
    let mut denom = Vec::new();
    for factor in factors {
        match denominator_factor(factor) {
            Some(den) => denom.push(den),
            None => numer.push(factor.clone()),
        }
    }

    match numer.split_first() {
        None => write!(f, "1")?,
        Some((first, rest)) if first.is_number(-1.0) && !rest.is_empty() => {
            write!(f, "-")?;
            fmt_factors(f, rest)?;
        },
        Some(_) => fmt_factors(f, &numer)?,
    }

    match denom.as_slice() {
        [] => Ok(()),
        [single] => {
            write!(f, " / ")?;
            fmt_grouped(f, single)
        },
        many => {
            write!(f, " / (")?;
            fmt_factors(f, many)?;
            write!(f, ")")
        },
    }
}

impl Display for SymExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SymExpr::Primary(primary) => write!(f, "{}", primary),
            SymExpr::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        write!(f, "{}", term)?;
                        continue;
                    }

                    match term.negated() {
                        Some(abs @ SymExpr::Add(_)) => write!(f, " - ({})", abs)?,
                        Some(abs) => write!(f, " - {}", abs)?,
                        None => write!(f, " + {}", term)?,
                    }
                }
                Ok(())
            },
            SymExpr::Mul(factors) => fmt_product(f, factors),
            SymExpr::Exp(base, exp) => {
                if denominator_factor(self).is_some() {
                    return fmt_product(f, std::slice::from_ref(self));
                }

                match &**base {
                    SymExpr::Primary(Primary::Number(n)) if *n < 0.0 => write!(f, "({})", base)?,
                    SymExpr::Primary(_) => write!(f, "{}", base)?,
                    _ => write!(f, "({})", base)?,
                }
                write!(f, " ^ ")?;
                match &**exp {
                    SymExpr::Primary(_) => write!(f, "{}", exp),
                    _ => write!(f, "({})", exp),
                }
            },
        }
    }
}
