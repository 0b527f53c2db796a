//! # nebula-constraint
//!
//! Fluent constraint chains over the members of a message, with templated,
//! structured error messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let mut set = MemberConstraintSet::<Person>::new();
//! set.verify_that("Age", |p: &Person| p.age)?.is_greater_than(18);
//! set.verify_that("Email", |p: &Person| p.email.clone())?
//!     .is_not_null_or_empty()
//!     .contains("@");
//!
//! let errors = set.validate(&person).unwrap_err();
//! for (member, messages) in errors.iter() {
//!     println!("{member}: {}", messages[0]);
//! }
//! ```
//!
//! ## Composing Constraints
//!
//! Constraints compose with `.and()`, `.or()` and `.not()`, and know their
//! own complement through [`invert`](foundation::Constraint::invert). Use the
//! [`constraint!`] macro to declare new constraints with little boilerplate,
//! or implement [`Constraint`](foundation::Constraint) directly for filters.
//!
//! ## Built-in Constraints
//!
//! - **Comparison**: [`IsEqualTo`](constraints::IsEqualTo),
//!   [`IsGreaterThan`](constraints::IsGreaterThan),
//!   [`IsSmallerThan`](constraints::IsSmallerThan) and their duals
//! - **Range**: [`IsInRange`](constraints::IsInRange)
//! - **Null**: [`IsNotNull`](constraints::IsNotNull), [`IsNull`](constraints::IsNull)
//! - **Text**: [`IsNotNullOrEmpty`](constraints::IsNotNullOrEmpty),
//!   [`Contains`](constraints::Contains), [`MatchesPattern`](constraints::MatchesPattern)
//! - **Collection**: [`IsEmpty`](constraints::IsEmpty), [`IsNotEmpty`](constraints::IsNotEmpty)
//! - **Type**: [`IsInstanceOf`](constraints::IsInstanceOf)
//! - **Predicate**: [`Satisfies`](constraints::Satisfies)

// ErrorMessage (with its typed arguments and nested reasons) is returned by
// value from every `evaluate` call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<And<Identity, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod constraints;
pub mod foundation;
mod macros;
pub mod member;
pub mod message;
pub mod prelude;
