//! A math question assistant.
//!
//! A free-text question such as `derivative of x^2` is classified by the keywords it contains,
//! the math is delegated to a [`MathEngine`] (by default the [`CasEngine`], backed by
//! [`cas_parser`] and [`cas_compute`]), and the result is formatted into a [`Response`]:
//!
//! - `solve`, `calculate`, or `evaluate`: the expression is evaluated to a number;
//! - `derivative` or `differentiate`: the expression is differentiated with respect to `x`;
//! - `integral` or `integrate`: pointers on integrating the expression are given;
//! - anything else is evaluated as a bare expression.
//!
//! Every failure is answered with the same [`HELP`](response::HELP) message.
//!
//! ```
//! use cas_assistant::Assistant;
//!
//! let mut assistant: Assistant = Assistant::default();
//! assert_eq!(assistant.submit("solve 3 * 4").as_str(), "The result is: 12");
//! assert_eq!(
//!     assistant.submit("differentiate 2x^3 + 3x").as_str(),
//!     "The derivative of 2x^3 + 3x is:\n6 * x ^ 2 + 3",
//! );
//! ```

pub mod assistant;
pub mod engine;
pub mod error;
pub mod handler;
pub mod intent;
pub mod normalize;
pub mod question;
pub mod response;

pub use assistant::{Assistant, State};
pub use engine::{CasEngine, MathEngine};
pub use error::Failure;
pub use intent::Intent;
pub use response::Response;
