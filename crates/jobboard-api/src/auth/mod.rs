//! Authentication and authorization.
//!
//! Split in two layers:
//! - [`token`]: stateless signed-token codec (issue/verify)
//! - [`gate`]: the access gate — the `Gate` extractor resolves and vets the
//!   caller's account; `require_role` and `require_approval` are pure checks
//!   applied to that snapshot, in that order, at every protected handler.

pub mod gate;
pub mod token;

pub use gate::{require_approval, require_role, Gate};
pub use token::TokenCodec;
