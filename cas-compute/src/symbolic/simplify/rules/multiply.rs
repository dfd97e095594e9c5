//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::symbolic::expr::SymExpr;
use super::do_multiply;

/// `a*(b*c) = a*b*c`
pub fn flatten(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, SymExpr::Mul(_))) {
            return None;
        }

        let new_factors = factors.iter()
            .flat_map(|factor| match factor {
                SymExpr::Mul(inner) => inner.clone(),
                other => vec![other.clone()],
            })
            .collect();
        Some(SymExpr::Mul(new_factors))
    })
}

/// Products with zero or one factors.
pub fn single_factor(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        (factors.len() <= 1).then(|| SymExpr::Mul(factors.to_vec()).downgrade())
    })
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        factors.iter()
            .any(|factor| factor.is_number(0.0))
            .then(|| SymExpr::num(0.0))
    })
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_number(1.0))
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(SymExpr::Mul(new_factors).downgrade())
        }
    })
}

/// Multiplies all the numeric factors together, placing the result at the start of the product.
///
/// `2*a*3 = 6*a`
pub fn fold_numbers(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        let count = factors.iter().filter(|factor| factor.as_number().is_some()).count();
        let already_folded = count == 1
            && factors.first().is_some_and(|factor| factor.as_number().is_some());
        if count == 0 || already_folded {
            return None;
        }

        let product = factors.iter().filter_map(SymExpr::as_number).product::<f64>();
        let mut new_factors = vec![SymExpr::num(product)];
        new_factors.extend(factors.iter().filter(|factor| factor.as_number().is_none()).cloned());
        Some(SymExpr::Mul(new_factors))
    })
}

/// Splits a factor into its base and exponent. Numbers are left to [`fold_numbers`].
///
/// - `a^2` -> `(a, 2)`
/// - `a` -> `(a, 1)`
fn split_power(expr: &SymExpr) -> Option<(SymExpr, SymExpr)> {
    match expr {
        SymExpr::Exp(base, exp) => Some(((**base).clone(), (**exp).clone())),
        _ if expr.as_number().is_some() => None,
        _ => Some((expr.clone(), SymExpr::num(1.0))),
    }
}

/// Combines like factors by adding their exponents.
///
/// `a*a = a^2`
/// `a^2*a^b = a^(2+b)`
/// etc.
pub fn combine_like_factors(expr: &SymExpr) -> Option<SymExpr> {
    do_multiply(expr, |factors| {
        let mut new_factors = factors.to_vec();
        let mut current_factor_idx = 0;

        while current_factor_idx < new_factors.len() {
            let Some((base, mut exp)) = split_power(&new_factors[current_factor_idx]) else {
                current_factor_idx += 1;
                continue;
            };

            let mut combined = false;
            let mut next_factor_idx = current_factor_idx + 1;
            while next_factor_idx < new_factors.len() {
                match split_power(&new_factors[next_factor_idx]) {
                    // bases must be strictly equal
                    Some((next_base, next_exp)) if next_base == base => {
                        exp = exp + next_exp;
                        new_factors.remove(next_factor_idx);
                        combined = true;
                    },
                    _ => next_factor_idx += 1,
                }
            }

            if combined {
                new_factors[current_factor_idx] = SymExpr::pow(base, exp);
            }

            current_factor_idx += 1;
        }

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(SymExpr::Mul(new_factors).downgrade())
        }
    })
}

/// Applies all multiplication rules.
pub fn all(expr: &SymExpr) -> Option<SymExpr> {
    flatten(expr)
        .or_else(|| single_factor(expr))
        .or_else(|| multiply_zero(expr))
        .or_else(|| multiply_one(expr))
        .or_else(|| fold_numbers(expr))
        .or_else(|| combine_like_factors(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::sym("x")
    }

    #[test]
    fn zero_and_one() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::num(0.0)]);
        assert_eq!(multiply_zero(&expr), Some(SymExpr::num(0.0)));

        let expr = SymExpr::Mul(vec![SymExpr::num(1.0), x()]);
        assert_eq!(multiply_one(&expr), Some(x()));
    }

    #[test]
    fn numbers_move_to_front() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::num(2.0), SymExpr::num(-3.0)]);
        assert_eq!(fold_numbers(&expr), Some(SymExpr::Mul(vec![SymExpr::num(-6.0), x()])));
    }

    #[test]
    fn like_factors() {
        let expr = SymExpr::Mul(vec![
            x(),
            SymExpr::sym("y"),
            SymExpr::pow(x(), SymExpr::num(2.0)),
        ]);
        assert_eq!(combine_like_factors(&expr), Some(SymExpr::Mul(vec![
            SymExpr::pow(x(), SymExpr::num(3.0)),
            SymExpr::sym("y"),
        ])));
    }
}
