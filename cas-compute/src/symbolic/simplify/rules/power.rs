//! Simplification rules for powers.

use crate::symbolic::expr::SymExpr;
use super::do_power;

/// `a^0 = 1`
pub fn zero_exponent(expr: &SymExpr) -> Option<SymExpr> {
    do_power(expr, |_, exp| exp.is_number(0.0).then(|| SymExpr::num(1.0)))
}

/// `a^1 = a`
pub fn one_exponent(expr: &SymExpr) -> Option<SymExpr> {
    do_power(expr, |base, exp| exp.is_number(1.0).then(|| base.clone()))
}

/// `1^a = 1`
pub fn one_base(expr: &SymExpr) -> Option<SymExpr> {
    do_power(expr, |base, _| base.is_number(1.0).then(|| SymExpr::num(1.0)))
}

/// Evaluates powers of two numbers, if the result is a real number.
///
/// `2^3 = 8`
pub fn fold_numbers(expr: &SymExpr) -> Option<SymExpr> {
    do_power(expr, |base, exp| {
        let value = base.as_number()?.powf(exp.as_number()?);
        value.is_finite().then(|| SymExpr::num(value))
    })
}

/// `(a^b)^c = a^(b*c)`, where `b` is a number and `c` is an integer.
pub fn power_of_power(expr: &SymExpr) -> Option<SymExpr> {
    do_power(expr, |base, exp| {
        let SymExpr::Exp(inner_base, inner_exp) = base else {
            return None;
        };
        let inner = inner_exp.as_number()?;
        let outer = exp.as_number().filter(|n| n.fract() == 0.0)?;
        Some(SymExpr::pow((**inner_base).clone(), SymExpr::num(inner * outer)))
    })
}

/// Applies all power rules.
pub fn all(expr: &SymExpr) -> Option<SymExpr> {
    zero_exponent(expr)
        .or_else(|| one_exponent(expr))
        .or_else(|| one_base(expr))
        .or_else(|| fold_numbers(expr))
        .or_else(|| power_of_power(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn identities() {
        let x = SymExpr::sym("x");
        assert_eq!(zero_exponent(&SymExpr::pow(x.clone(), SymExpr::num(0.0))), Some(SymExpr::num(1.0)));
        assert_eq!(one_exponent(&SymExpr::pow(x.clone(), SymExpr::num(1.0))), Some(x.clone()));
        assert_eq!(one_base(&SymExpr::pow(SymExpr::num(1.0), x)), Some(SymExpr::num(1.0)));
    }

    #[test]
    fn non_real_powers_are_kept() {
        let expr = SymExpr::pow(SymExpr::num(-8.0), SymExpr::num(0.5));
        assert_eq!(fold_numbers(&expr), None);
    }
}
