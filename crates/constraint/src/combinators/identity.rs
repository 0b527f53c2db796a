//! The neutral constraint every member chain starts from.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::Inverted;
use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, Describe, Rename, SharedConstraint, Value,
};
use crate::message::resources;

/// Accepts every value and hands it on unchanged.
///
/// `Identity` is the neutral element of [`And`](super::And): chaining a
/// constraint after it behaves like the constraint alone.
pub struct Identity<T> {
    metadata: ConstraintMetadata,
    _input: PhantomData<fn() -> T>,
}

impl<T> Identity<T> {
    /// Creates the identity constraint for `T`.
    pub fn new() -> Self {
        Self {
            metadata: resources::IDENTITY,
            _input: PhantomData,
        }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            _input: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("name", self.metadata.name())
            .finish()
    }
}

impl<T> Describe for Identity<T> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }
}

impl<T: Value> Constraint for Identity<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        Some(value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<T>, ConstraintError> {
        Ok(Arc::new(Inverted::new(self.clone())))
    }
}

impl<T> Rename for Identity<T> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            _input: PhantomData,
        }
    }
}

/// Creates the identity constraint for `T`.
pub fn identity<T: Value>() -> Identity<T> {
    Identity::new()
}
