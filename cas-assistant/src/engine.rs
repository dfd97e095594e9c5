//! The math capability the assistant delegates to.

use cas_compute::{
    numerical::eval::Eval,
    symbolic::{self, SymExpr},
};
use cas_error::Error;
use cas_parser::parser::{ast::Expr, Parser};
use std::fmt::Display;

/// The operations the assistant needs from a computer algebra system.
///
/// Each fallible operation reports a [`cas_error::Error`], so that failures can be rendered as
/// reports against the text that was given to [`MathEngine::parse`].
pub trait MathEngine {
    /// A parsed expression.
    type Ast;

    /// An expression in the form used for symbolic manipulation.
    type Sym: Display;

    /// Parses the text into an expression.
    fn parse(&self, text: &str) -> Result<Self::Ast, Error>;

    /// Evaluates the expression with no variables defined other than the builtin constants.
    fn evaluate(&self, expr: &Self::Ast) -> Result<f64, Error>;

    /// Differentiates the expression with respect to the given variable.
    fn derivative(&self, expr: &Self::Ast, var: &str) -> Result<Self::Sym, Error>;

    /// Simplifies the expression.
    fn simplify(&self, expr: &Self::Sym) -> Self::Sym;
}

/// The [`MathEngine`] backed by [`cas_parser`] and [`cas_compute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CasEngine;

impl MathEngine for CasEngine {
    type Ast = Expr;
    type Sym = SymExpr;

    fn parse(&self, text: &str) -> Result<Expr, Error> {
        Parser::new(text).try_parse_full::<Expr>()
    }

    fn evaluate(&self, expr: &Expr) -> Result<f64, Error> {
        expr.eval_default()
    }

    fn derivative(&self, expr: &Expr, var: &str) -> Result<SymExpr, Error> {
        symbolic::derivative(&SymExpr::try_from(expr)?, var)
    }

    fn simplify(&self, expr: &SymExpr) -> SymExpr {
        symbolic::simplify(expr)
    }
}
