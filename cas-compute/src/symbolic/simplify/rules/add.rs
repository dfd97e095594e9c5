//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::expr::SymExpr;
use super::do_add;

/// `a+(b+c) = a+b+c`
pub fn flatten(expr: &SymExpr) -> Option<SymExpr> {
    do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, SymExpr::Add(_))) {
            return None;
        }

        let new_terms = terms.iter()
            .flat_map(|term| match term {
                SymExpr::Add(inner) => inner.clone(),
                other => vec![other.clone()],
            })
            .collect();
        Some(SymExpr::Add(new_terms))
    })
}

/// Sums with zero or one terms.
pub fn single_term(expr: &SymExpr) -> Option<SymExpr> {
    do_add(expr, |terms| (terms.len() <= 1).then(|| SymExpr::Add(terms.to_vec()).downgrade()))
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &SymExpr) -> Option<SymExpr> {
    do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_number(0.0))
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })
}

/// Adds all the numeric terms together, placing the result at the end of the sum.
///
/// `1+a+2 = a+3`
pub fn fold_numbers(expr: &SymExpr) -> Option<SymExpr> {
    do_add(expr, |terms| {
        let count = terms.iter().filter(|term| term.as_number().is_some()).count();
        let already_folded = count == 1 && terms.last().is_some_and(|term| term.as_number().is_some());
        if count == 0 || already_folded {
            return None;
        }

        let sum = terms.iter().filter_map(SymExpr::as_number).sum::<f64>();
        let mut new_terms = terms.iter()
            .filter(|term| term.as_number().is_none())
            .cloned()
            .collect::<Vec<_>>();
        new_terms.push(SymExpr::num(sum));
        Some(SymExpr::Add(new_terms))
    })
}

/// Splits a term into its numeric coefficient and the remaining factors. Numbers have no
/// remaining factors and are left to [`fold_numbers`].
///
/// - `3*a` -> `(3, a)`
/// - `2*a*b*4` -> `(8, a*b)`
/// - `a` -> `(1, a)`
fn split_coefficient(expr: &SymExpr) -> Option<(f64, SymExpr)> {
    match expr {
        SymExpr::Primary(_) if expr.as_number().is_some() => None,
        SymExpr::Mul(factors) => {
            let (numbers, rest): (Vec<_>, Vec<_>) = factors.iter()
                .cloned()
                .partition(|factor| factor.as_number().is_some());
            if rest.is_empty() {
                return None;
            }

            let coeff = numbers.iter().filter_map(SymExpr::as_number).product::<f64>();
            Some((coeff, SymExpr::Mul(rest).downgrade()))
        },
        _ => Some((1.0, expr.clone())),
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `a+a+a = 3a`
/// `2a+3a = 5a`
/// etc.
pub fn combine_like_terms(expr: &SymExpr) -> Option<SymExpr> {
    do_add(expr, |terms| {
        let mut new_terms = terms.to_vec();
        let mut current_term_idx = 0;

        // O(n^2) in the number of terms
        while current_term_idx < new_terms.len() {
            let Some((mut coeff, factors)) = split_coefficient(&new_terms[current_term_idx]) else {
                current_term_idx += 1;
                continue;
            };

            let mut combined = false;
            let mut next_term_idx = current_term_idx + 1;
            while next_term_idx < new_terms.len() {
                match split_coefficient(&new_terms[next_term_idx]) {
                    // factors must be strictly equal
                    Some((next_coeff, next_factors)) if next_factors == factors => {
                        coeff += next_coeff;
                        new_terms.remove(next_term_idx);
                        combined = true;
                    },
                    _ => next_term_idx += 1,
                }
            }

            if combined {
                new_terms[current_term_idx] = if coeff == 0.0 {
                    SymExpr::num(0.0)
                } else if coeff == 1.0 {
                    factors
                } else {
                    SymExpr::num(coeff) * factors
                };
            }

            current_term_idx += 1;
        }

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })
}

/// Applies all addition rules.
pub fn all(expr: &SymExpr) -> Option<SymExpr> {
    flatten(expr)
        .or_else(|| single_term(expr))
        .or_else(|| add_zero(expr))
        .or_else(|| fold_numbers(expr))
        .or_else(|| combine_like_terms(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::sym("x")
    }

    #[test]
    fn zero_terms_removed() {
        let expr = SymExpr::Add(vec![SymExpr::num(0.0), x(), SymExpr::num(0.0)]);
        assert_eq!(add_zero(&expr), Some(x()));
        assert_eq!(add_zero(&x()), None);
    }

    #[test]
    fn numbers_move_to_end() {
        let expr = SymExpr::Add(vec![SymExpr::num(1.0), x(), SymExpr::num(2.5)]);
        assert_eq!(fold_numbers(&expr), Some(SymExpr::Add(vec![x(), SymExpr::num(3.5)])));

        let folded = SymExpr::Add(vec![x(), SymExpr::num(3.5)]);
        assert_eq!(fold_numbers(&folded), None);
    }

    #[test]
    fn like_terms() {
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::num(2.0), x()]),
            SymExpr::sym("y"),
            SymExpr::Mul(vec![x(), SymExpr::num(3.0)]),
        ]);
        assert_eq!(combine_like_terms(&expr), Some(SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::num(5.0), x()]),
            SymExpr::sym("y"),
        ])));
    }

    #[test]
    fn unlike_terms_untouched() {
        let expr = SymExpr::Add(vec![x(), SymExpr::pow(x(), SymExpr::num(2.0))]);
        assert_eq!(combine_like_terms(&expr), None);
    }
}
