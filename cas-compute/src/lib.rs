//! Evaluation and algebraic manipulation of the expressions produced by [`cas_parser`].
//!
//! - [`numerical`] evaluates expressions to `f64` values, and formats those values for display.
//! - [`symbolic`] converts expressions into a flattened representation that supports symbolic
//! differentiation and simplification.
//!
//! ```
//! use cas_compute::numerical::{eval::Eval, fmt::fmt_number};
//! use cas_compute::symbolic::{derivative, simplify, SymExpr};
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("x^2 + 3x").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::try_from(&ast).unwrap();
//! let derived = simplify(&derivative(&expr, "x").unwrap());
//! assert_eq!(derived.to_string(), "2 * x + 3");
//!
//! let ast = Parser::new("1 / 4").try_parse_full::<Expr>().unwrap();
//! assert_eq!(fmt_number(ast.eval_default().unwrap()), "0.25");
//! ```

pub mod consts;
pub mod numerical;
pub mod symbolic;
