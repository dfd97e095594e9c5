//! Simplification of [`SymExpr`]s to an equivalent, more readable form.

pub mod rules;

use super::expr::{Primary, SymExpr};

/// Simplifies the children of the expression, returning `Some` if any of them changed.
fn simplify_children(expr: &SymExpr) -> Option<SymExpr> {
    /// Simplifies each expression in the list, returning `None` if none of them changed.
    fn simplify_all(exprs: &[SymExpr]) -> Option<Vec<SymExpr>> {
        let mut changed = false;
        let simplified = exprs.iter()
            .map(|expr| match inner_simplify(expr) {
                Some(new_expr) => {
                    changed = true;
                    new_expr
                },
                None => expr.clone(),
            })
            .collect();
        changed.then_some(simplified)
    }

    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => {
            simplify_all(args).map(|args| SymExpr::call(name.clone(), args))
        },
        SymExpr::Primary(_) => None,
        SymExpr::Add(terms) => simplify_all(terms).map(SymExpr::Add),
        SymExpr::Mul(factors) => simplify_all(factors).map(SymExpr::Mul),
        SymExpr::Exp(base, exp) => {
            let new_base = inner_simplify(base);
            let new_exp = inner_simplify(exp);
            if new_base.is_none() && new_exp.is_none() {
                return None;
            }
            Some(SymExpr::pow(
                new_base.unwrap_or_else(|| (**base).clone()),
                new_exp.unwrap_or_else(|| (**exp).clone()),
            ))
        },
    }
}

/// Repeatedly applies the simplification rules to the expression and its children until none of
/// them apply. Returns `None` if the expression was already simplified.
fn inner_simplify(expr: &SymExpr) -> Option<SymExpr> {
    let mut current = expr.clone();
    let mut changed = false;

    loop {
        if let Some(new_expr) = rules::all(&current) {
            current = new_expr;
            changed = true;
            continue;
        }

        match simplify_children(&current) {
            Some(new_expr) => {
                current = new_expr;
                changed = true;
            },
            None => break,
        }
    }

    changed.then_some(current)
}

/// Simplifies the given expression.
///
/// Like terms and like factors are combined, numbers are folded together, and identities such as
/// `a + 0`, `a * 1`, and `a ^ 1` are removed.
///
/// ```
/// use cas_compute::symbolic::{simplify, SymExpr};
/// use cas_parser::parser::{ast::Expr, Parser};
///
/// let ast = Parser::new("x * x * 3 + 2x^2 - 5").try_parse_full::<Expr>().unwrap();
/// let simplified = simplify(&SymExpr::try_from(&ast).unwrap());
/// assert_eq!(simplified.to_string(), "5 * x ^ 2 - 5");
/// ```
pub fn simplify(expr: &SymExpr) -> SymExpr {
    inner_simplify(expr).unwrap_or_else(|| expr.clone())
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::Expr as AstExpr, Parser};
    use crate::symbolic::derivative;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(source: &str) -> String {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        simplify(&SymExpr::try_from(&ast).unwrap()).to_string()
    }

    fn derived(source: &str) -> String {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        let expr = SymExpr::try_from(&ast).unwrap();
        simplify(&derivative(&expr, "x").unwrap()).to_string()
    }

    #[test]
    fn identities() {
        assert_eq!(simplified("x + 0"), "x");
        assert_eq!(simplified("1x"), "x");
        assert_eq!(simplified("0 * sin(x)"), "0");
        assert_eq!(simplified("x^1"), "x");
        assert_eq!(simplified("x^0"), "1");
    }

    #[test]
    fn like_terms_and_factors() {
        assert_eq!(simplified("x + x"), "2 * x");
        assert_eq!(simplified("x * x^2"), "x ^ 3");
        assert_eq!(simplified("3x - 3x + 1"), "1");
        assert_eq!(simplified("(x^2)^3"), "x ^ 6");
    }

    #[test]
    fn numbers_fold() {
        assert_eq!(simplified("2 * x * 3"), "6 * x");
        assert_eq!(simplified("1 + x + 2"), "x + 3");
        assert_eq!(simplified("2^3"), "8");
    }

    #[test]
    fn derivatives() {
        assert_eq!(derived("x^2"), "2 * x");
        assert_eq!(derived("2x^3 + 3x"), "6 * x ^ 2 + 3");
        assert_eq!(derived("cos(x)"), "-sin(x)");
        assert_eq!(derived("1/x"), "-1 / x ^ 2");
        assert_eq!(derived("(x^2 + x)^2"), "2 * (2 * x + 1) * (x ^ 2 + x)");
        assert_eq!(derived("5"), "0");
    }
}
