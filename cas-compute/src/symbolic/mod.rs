//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`SymExpr`] nodes. It's
//! similar to the [`cas_parser::parser::ast::Expr`] nodes produced by [`cas_parser`], with the
//! main difference being that [`SymExpr`] nodes **flatten** out the tree structure.
//!
//! For example, the expression `x + (y + z)` would be represented internally as a single
//! [`SymExpr::Add`] node with _three_ children, `x`, `y`, and `z`, where as the
//! [`cas_parser::parser::ast::Expr`] node would have two children, `x` and `(y + z)`.
//!
//! Subtraction, negation, and division are rewritten in terms of addition, multiplication, and
//! powers: `a - b` becomes `a + -1 * b`, and `a / b` becomes `a * b^-1`.
//!
//! If you have a [`cas_parser::parser::ast::Expr`], you can convert it to a [`SymExpr`] using
//! the [`TryFrom`] trait. Conversion fails for expressions that have no symbolic meaning here,
//! such as assignments, remainders, and factorials.
//!
//! ```
//! use cas_compute::symbolic::expr::{Primary, SymExpr};
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + (y + z)");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! let expr = SymExpr::try_from(&ast_expr).unwrap();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//!     SymExpr::Primary(Primary::Symbol("y".to_string())),
//!     SymExpr::Primary(Primary::Symbol("z".to_string())),
//! ]));
//! ```
//!
//! # Simplification
//!
//! Simplification is done by applying a set of simplification rules to the expression in multiple
//! passes, until no rule applies. Each rule is simply a function that accepts an expression and
//! returns [`Option<SymExpr>`]; if the rule is applicable to the expression, the rule is applied
//! and the result is returned.
//!
//! ```
//! use cas_compute::symbolic::{expr::{Primary, SymExpr}, simplify};
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + x + x");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//! let simplified = simplify(&SymExpr::try_from(&ast_expr).unwrap());
//!
//! // `x + x + x = 3x`
//! assert_eq!(simplified, SymExpr::Mul(vec![
//!     SymExpr::Primary(Primary::Number(3.0)),
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//! ]));
//! assert_eq!(simplified.to_string(), "3 * x");
//! ```

pub mod derivative;
pub mod error;
pub mod expr;
pub mod simplify;

pub use derivative::derivative;
pub use expr::{Primary, SymExpr};
pub use simplify::simplify;
