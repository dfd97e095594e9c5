//! Numerical evaluation of expressions.

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod fmt;

pub use ctxt::Ctxt;
pub use eval::Eval;
