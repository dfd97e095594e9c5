use cas_error::Error;
use super::expr::{Primary, SymExpr};

mod function;

/// Returns `true` if the given [`SymExpr`] is "clearly" zero. This is intended to clean up
/// expressions and is not mathematically rigorous.
fn is_trivially_zero(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Number(n)) => *n == 0.0,
        SymExpr::Add(sum) => sum.iter().all(is_trivially_zero),
        SymExpr::Mul(mul) => mul.iter().any(is_trivially_zero),
        SymExpr::Exp(base, exponent) => is_trivially_zero(base) && !is_trivially_zero(exponent),
        _ => false,
    }
}

/// Returns `true` if the given [`SymExpr`] is "clearly" one. This is intended to clean up
/// expressions and is not mathematically rigorous.
fn is_trivially_unity(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Number(n)) => *n == 1.0,
        SymExpr::Mul(exprs) => exprs.iter().all(is_trivially_unity),
        SymExpr::Exp(base, exponent) => is_trivially_zero(exponent) || is_trivially_unity(base),
        SymExpr::Add(exprs) => exprs.len() == 1 && is_trivially_unity(&exprs[0]),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero.
#[derive(Default)]
struct MultBuilder(Vec<SymExpr>);

impl From<MultBuilder> for SymExpr {
    fn from(value: MultBuilder) -> Self {
        SymExpr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: SymExpr) {
        if is_trivially_zero(&e) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![SymExpr::num(0.0)];
            return;
        }

        if !is_trivially_unity(&e) {
            self.0.push(e)
        }
    }
}

/// Helper struct to build a summation of expressions while applying basic simplification rules.
/// Only non-zero expressions are added to the sum.
#[derive(Default)]
struct SumBuilder(Vec<SymExpr>);

impl From<SumBuilder> for SymExpr {
    fn from(value: SumBuilder) -> Self {
        SymExpr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: SymExpr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(exprs: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let mut sum = SumBuilder::default();
    for elem in exprs {
        sum.add(derivative(elem, with)?);
    }
    Ok(sum.into())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(product: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let mut outer_sum = SumBuilder::default();

    for derivative_index in 0..product.len() {
        let mut inner_mult = MultBuilder::default();
        for (term_index, term) in product.iter().enumerate() {
            if derivative_index == term_index {
                inner_mult.mult(derivative(term, with)?);
            } else {
                inner_mult.mult(term.clone());
            }
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// Differentiates `f ^ g`.
fn power_rule(f: &SymExpr, g: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    let power = SymExpr::pow(f.clone(), g.clone());
    let mut mult_group = MultBuilder::default();

    match (f.depends_on(with), g.depends_on(with)) {
        (false, false) => return Ok(SymExpr::num(0.0)),

        // `(f ^ n)' = f' * n * f ^ (n - 1)`
        (true, false) => {
            let lowered = match g.as_number() {
                Some(n) => SymExpr::num(n - 1.0),
                None => g.clone() + SymExpr::num(-1.0),
            };
            mult_group.mult(derivative(f, with)?);
            mult_group.mult(g.clone());
            mult_group.mult(SymExpr::pow(f.clone(), lowered));
        },

        // `(a ^ g)' = g' * a ^ g * log(a)`
        (false, true) => {
            mult_group.mult(derivative(g, with)?);
            mult_group.mult(power);
            if f.as_symbol() != Some("e") {
                mult_group.mult(SymExpr::call("log", vec![f.clone()]));
            }
        },

        // `(f ^ g)' = f ^ g * (g' * log(f) + g * f' / f)`
        (true, true) => {
            let mut log_term = MultBuilder::default();
            log_term.mult(derivative(g, with)?);
            log_term.mult(SymExpr::call("log", vec![f.clone()]));

            let mut ratio_term = MultBuilder::default();
            ratio_term.mult(g.clone());
            ratio_term.mult(derivative(f, with)?);
            ratio_term.mult(f.clone().recip());

            let mut sum = SumBuilder::default();
            sum.add(log_term.into());
            sum.add(ratio_term.into());

            mult_group.mult(power);
            mult_group.mult(sum.into());
        },
    }

    Ok(mult_group.into())
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// The result is not simplified; pass it to [`simplify`](super::simplify) for a readable form.
/// Returns [`Err`] if the expression calls a function whose derivative is not known.
///
/// ```
/// use cas_compute::symbolic::{derivative, simplify, SymExpr};
/// use cas_parser::parser::{ast::Expr, Parser};
///
/// let ast = Parser::new("sin(x^2)").try_parse_full::<Expr>().unwrap();
/// let result = derivative(&SymExpr::try_from(&ast).unwrap(), "x").unwrap();
/// assert_eq!(simplify(&result).to_string(), "2 * x * cos(x ^ 2)");
/// ```
pub fn derivative(f: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if is_trivially_zero(f) {
        return Ok(SymExpr::num(0.0));
    }

    let expr = match f {
        SymExpr::Primary(Primary::Number(_)) => SymExpr::num(0.0),
        SymExpr::Primary(Primary::Symbol(sym)) => {
            if sym == with {
                SymExpr::num(1.0)
            } else {
                SymExpr::num(0.0)
            }
        },
        SymExpr::Primary(Primary::Call(func, args)) => {
            function::function_derivative(func, args, with)?
        },
        SymExpr::Add(exprs) => sum_rule(exprs, with)?,
        SymExpr::Mul(exprs) => product_rule(exprs, with)?,
        SymExpr::Exp(base, exponent) => power_rule(base, exponent, with)?,
    };

    if is_trivially_zero(&expr) {
        Ok(SymExpr::num(0.0))
    } else {
        Ok(expr)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::symbolic::simplify;
    use cas_parser::parser::{ast::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates the expression with `x` substituted in.
    fn eval_x(e: &impl Eval, x: f64) -> f64 {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", x);
        e.eval(&mut ctxt).unwrap()
    }

    /// Approximates the derivative of the expression with a central difference.
    fn finite_difference(e: &AstExpr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn parse(source: &str) -> SymExpr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        SymExpr::try_from(&ast).unwrap()
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let ast_expr = Parser::new(function).try_parse_full::<AstExpr>().unwrap();
        let expr = SymExpr::try_from(&ast_expr).unwrap();
        let symbolic = derivative(&expr, "x")
            .unwrap_or_else(|err| panic!("derivative of \"{function}\" failed: {err}"));
        let simplified = simplify(&symbolic);

        for point in points {
            let numerically_computed = finite_difference(&ast_expr, point);
            for candidate in [&symbolic, &simplified] {
                let symbolically_computed = eval_x(candidate, point);
                assert!(
                    (symbolically_computed - numerically_computed).abs() < TOL,
                    "for \"{function}\" at x={point}, symbolically computed derivative `{candidate}` \
                    was {symbolically_computed} but numerically computed derivative was \
                    {numerically_computed}, which was out of tolerance {TOL}",
                );
            }
        }
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("3x^4 - 2x", [-2., 0.5, 3.]);
        test_for_function("(2x + 1)^3", [-1., 0., 1.5]);
        test_for_function("x^0.5", [0.5, 1., 4.]);
        test_for_function("1 / x", [0.5, 2., 7.]);
    }

    #[test]
    fn product_and_quotient() {
        test_for_function("x sin(x)", [0., 1., 2.]);
        test_for_function("(x^2 + 1) / (x - 3)", [0., 1., 2.]);
    }

    #[test]
    fn exponential() {
        test_for_function("e^(2x)", [0., 0.5, 1.]);
        test_for_function("2^x", [0., 1., 3.]);
        test_for_function("x^x", [0.5, 1., 2.]);
    }

    #[test]
    fn trigonometric() {
        test_for_function("sin(x) + cos(x)", [0., 1., 2.]);
        test_for_function("tan(3x)", [0., 0.2, 0.4]);
        test_for_function("sec(x) + csc(x) + cot(x)", [0.5, 1., 1.2]);
        test_for_function("asin(x / 2) + acos(x / 3) + atan(x)", [0., 0.5, 1.]);
    }

    #[test]
    fn hyperbolic_and_logarithmic() {
        test_for_function("sinh(x) + cosh(2x) + tanh(x)", [0., 0.5, 1.]);
        test_for_function("log(x^2 + 1)", [0., 1., 2.]);
        test_for_function("log(x, 2) + sqrt(x) + exp(x)", [0.5, 1., 3.]);
    }

    #[test]
    fn other_variables_are_constants() {
        assert_eq!(derivative(&parse("y^2 + 3"), "x").unwrap(), SymExpr::num(0.0));
        assert_eq!(derivative(&parse("x"), "x").unwrap(), SymExpr::num(1.0));
    }

    #[test]
    fn unknown_function() {
        let err = derivative(&parse("floor(x)"), "x").unwrap_err();
        assert_eq!(err.to_string(), "cannot compute the derivative of the `floor` function");
        assert!(err.spans.is_empty());
    }
}
