//! Combinators composing constraints into larger ones.
//!
//! - [`And`] chains two constraints, feeding the first one's output to the
//!   second
//! - [`Or`] accepts a value when any alternative does
//! - [`Inverted`] negates a constraint without a dedicated dual
//! - [`Identity`] accepts everything and starts every member chain

mod and;
mod identity;
mod not;
mod or;

pub use and::{And, and};
pub use identity::{Identity, identity};
pub use not::{Inverted, not};
pub use or::{Or, any_of, or};
