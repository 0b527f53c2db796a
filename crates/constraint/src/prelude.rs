//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_constraint::prelude::*;` import that brings
//! in the traits, constraints, combinators and set types needed to register
//! and evaluate constraints.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let adult = is_not_null::<u32>().and(is_greater_than_or_equal_to(18));
//! let outside = is_smaller_than(0).or(is_greater_than(100));
//! let mut set = MemberConstraintSet::<Person>::new();
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, names
// ============================================================================

pub use crate::foundation::{
    Constraint, ConstraintError, ConstraintExt, ConstraintMetadata, Describe, Identifier, Rename,
    SharedConstraint, StringTemplate, Value,
};

// ============================================================================
// CONSTRAINTS: All built-in constraints
// ============================================================================

pub use crate::constraints::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Identity, Inverted, Or, and, any_of, identity, not, or};

// ============================================================================
// MESSAGES AND MEMBER SETS
// ============================================================================

pub use crate::config::{EvaluationMode, ValidationConfig};
pub use crate::member::{Member, MemberBuilder, MemberConstraintSet};
pub use crate::message::{
    Argument, ErrorMessage, ErrorMessageCollection, ErrorMessageReader, FormatProvider,
};
