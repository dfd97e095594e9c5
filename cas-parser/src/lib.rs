//! Tokenizer and parser for the mathematical expressions found in free-text math questions.
//!
//! The grammar covers numbers, variables, function calls, parentheses, the arithmetic operators
//! `+ - * / % ^`, factorial `!`, implicit multiplication by juxtaposition (`2x`, `3(x + 1)`), and
//! assignment of a value to a variable (`x = 5`).
//!
//! ```
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("3x^2 + 1");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..8);
//! ```

pub mod parser;
pub mod tokenizer;
