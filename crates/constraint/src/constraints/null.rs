//! Null checks on optional values
//!
//! [`IsNotNull`] is a filter: it narrows `Option<T>` to `T`, so the
//! constraints chained after it see the unwrapped value.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::combinators::Inverted;
use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, Describe, Rename, SharedConstraint, Value,
};
use crate::message::resources;

// ============================================================================
// IS NOT NULL
// ============================================================================

/// Accepts `Some` and hands on the contained value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let present = is_not_null::<u32>();
/// assert_eq!(present.apply(&Some(4)), Some(4));
/// assert_eq!(present.apply(&None), None);
/// ```
pub struct IsNotNull<T> {
    metadata: ConstraintMetadata,
    _input: PhantomData<fn() -> T>,
}

impl<T> IsNotNull<T> {
    /// Creates the constraint.
    pub fn new() -> Self {
        Self {
            metadata: resources::IS_NOT_NULL,
            _input: PhantomData,
        }
    }
}

impl<T> Default for IsNotNull<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IsNotNull<T> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            _input: PhantomData,
        }
    }
}

impl<T> fmt::Debug for IsNotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsNotNull")
            .field("name", self.metadata.name())
            .finish()
    }
}

impl<T> Describe for IsNotNull<T> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }
}

impl<T: Value> Constraint for IsNotNull<T> {
    type Input = Option<T>;
    type Output = T;

    fn apply(&self, value: &Option<T>) -> Option<T> {
        value.clone()
    }

    fn invert(&self) -> Result<SharedConstraint<Option<T>>, ConstraintError> {
        Ok(Arc::new(IsNull::<T>::new()))
    }
}

impl<T> Rename for IsNotNull<T> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            _input: PhantomData,
        }
    }
}

/// Creates a constraint accepting `Some` and narrowing it to the value.
#[must_use]
pub fn is_not_null<T: Value>() -> IsNotNull<T> {
    IsNotNull::new()
}

// ============================================================================
// IS NULL
// ============================================================================

crate::constraint! {
    /// Accepts `None`.
    ///
    /// Its inverse accepts `Some` without narrowing, since an inverse keeps
    /// the input type.
    pub IsNull<T: Value> for Option<T>;
    metadata: resources::IS_NULL;
    rule(input) { input.is_none() }
    invert(self) { Inverted::new(self.clone()).with_metadata(resources::IS_NOT_NULL) }
    fn is_null();
}

// ============================================================================
// TESTS
// ============================================================================
