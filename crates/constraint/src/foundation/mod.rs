//! Core constraint types and traits
//!
//! This module contains the fundamental building blocks of the constraint
//! system:
//!
//! - **Names**: [`Identifier`], [`StringTemplate`], [`ConstraintMetadata`]
//! - **Traits**: [`Constraint`], [`Describe`], [`Rename`], [`ConstraintExt`]
//! - **Visitor**: [`ConstraintVisitor`], [`walk`]
//! - **Errors**: [`ConstraintError`]
//!
//! # Architecture
//!
//! ## 1. One contract for predicates and filters
//!
//! A constraint has an `Input` and an `Output`. Predicates hand their input
//! back; filters narrow it:
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let present = is_not_null::<u32>();          // Option<u32> -> u32
//! let adult = present.and(is_greater_than(17)); // u32 -> u32
//! assert_eq!(adult.apply(&Some(21)), Some(21));
//! assert_eq!(adult.apply(&None), None);
//! ```
//!
//! ## 2. Failures are values
//!
//! An unsatisfied constraint produces an [`ErrorMessage`](crate::message::ErrorMessage).
//! [`ConstraintError`] is reserved for malformed constraints and
//! registrations.

pub mod error;
pub mod identifier;
pub mod metadata;
pub mod template;
pub mod traits;

pub use error::ConstraintError;
pub use identifier::Identifier;
pub use metadata::{ConstraintMetadata, Value};
pub use template::{StringTemplate, TemplatePart};
pub use traits::{
    AsDescribe, Constraint, ConstraintExt, ConstraintNode, ConstraintVisitor, Describe, Rename,
    SharedConstraint, walk,
};
