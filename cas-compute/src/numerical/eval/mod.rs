mod binary;
mod call;
mod expr;
mod literal;
mod symbolic;
mod unary;

use cas_error::Error;
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&mut Default::default())
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::consts;
    use super::*;

    use cas_parser::parser::{ast::expr::Expr, Parser};

    fn eval(source: &str) -> Result<f64, Error> {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        expr.eval_default()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval("1 + 2").unwrap(), 3.0);
        assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(eval("2 + 2").unwrap(), 4.0);
    }

    #[test]
    fn binary_and_unary() {
        assert_eq!(eval("3 * -5 / 5! + 6").unwrap(), 5.875);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval("((1 + 9) / 5) * 3").unwrap(), 6.0);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval("2(3 + 1)").unwrap(), 8.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
    }

    #[test]
    fn remainder_follows_divisor_sign() {
        assert_eq!(eval("7 % 3").unwrap(), 1.0);
        assert_eq!(eval("-7 % 3").unwrap(), 2.0);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn degree_to_radian() {
        assert_float_relative_eq!(eval("90 * 2 * pi / 360").unwrap(), consts::PI / 2.0);
    }

    #[test]
    fn builtin_calls() {
        assert_float_relative_eq!(eval("sin(pi / 2)").unwrap(), 1.0);
        assert_float_relative_eq!(eval("log(e^3)").unwrap(), 3.0);
        assert_float_relative_eq!(eval("sqrt(16) + abs(-2)").unwrap(), 6.0);
    }

    #[test]
    fn variables_from_context() {
        let expr = Parser::new("3x^2").try_parse_full::<Expr>().unwrap();
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", 2.0);
        assert_eq!(expr.eval(&mut ctxt).unwrap(), 12.0);
    }

    #[test]
    fn assignment_binds_variable() {
        let mut ctxt = Ctxt::default();
        let assign = Parser::new("y = 4").try_parse_full::<Expr>().unwrap();
        assert_eq!(assign.eval(&mut ctxt).unwrap(), 4.0);

        let use_var = Parser::new("2y").try_parse_full::<Expr>().unwrap();
        assert_eq!(use_var.eval(&mut ctxt).unwrap(), 8.0);
    }

    #[test]
    fn undefined_variable() {
        let err = eval("asdkjaskjd").unwrap_err();
        assert_eq!(err.to_string(), "`asdkjaskjd` is not defined");
        assert_eq!(err.spans, vec![0..10]);
    }

    #[test]
    fn undefined_function() {
        let err = eval("sinn(2)").unwrap_err();
        assert_eq!(err.to_string(), "the `sinn` function does not exist");
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            eval("sin(1, 2)").unwrap_err().to_string(),
            "too many arguments were given to the `sin` function",
        );
        assert_eq!(
            eval("log()").unwrap_err().to_string(),
            "missing argument #1 for the `log` function",
        );
    }

    #[test]
    fn invalid_factorial() {
        assert_eq!(
            eval("2.5!").unwrap_err().to_string(),
            "cannot compute the factorial of 2.5",
        );
        assert!(eval("(-1)!").is_err());
    }
}
