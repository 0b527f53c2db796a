//! Runtime type checks
//!
//! [`IsInstanceOf`] narrows a value to one of the types it may hold, the way
//! [`IsNotNull`](super::IsNotNull) narrows an `Option`. Which narrowings
//! exist is decided by [`Narrow`] implementations: type-erased values
//! downcast, and sum types can implement it per variant.

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::combinators::Inverted;
use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, Describe, Rename, SharedConstraint, Value,
};
use crate::member::short_type_name;
use crate::message::{Argument, MessageArguments, resources};

/// A shared, type-erased value.
pub type AnyValue = Arc<dyn Any + Send + Sync>;

/// Values that may hold a `Target`.
///
/// # Examples
///
/// ```rust,ignore
/// enum Payment {
///     Card(Card),
///     Transfer(Transfer),
/// }
///
/// impl Narrow<Card> for Payment {
///     fn narrow(&self) -> Option<Card> {
///         match self {
///             Payment::Card(card) => Some(card.clone()),
///             Payment::Transfer(_) => None,
///         }
///     }
/// }
/// ```
pub trait Narrow<Target>: Value {
    /// Returns the held `Target`, or `None` if the value is of another type.
    fn narrow(&self) -> Option<Target>;
}

impl<Target: Value> Narrow<Target> for AnyValue {
    fn narrow(&self) -> Option<Target> {
        (**self).downcast_ref::<Target>().cloned()
    }
}

fn write_type<O>(arguments: &mut MessageArguments) {
    arguments.insert("type", Argument::text(short_type_name(type_name::<O>())));
}

// ============================================================================
// IS INSTANCE OF
// ============================================================================

/// Accepts values holding an `O` and hands on the narrowed value.
pub struct IsInstanceOf<I, O> {
    metadata: ConstraintMetadata,
    _types: PhantomData<fn() -> (I, O)>,
}

impl<I, O> IsInstanceOf<I, O> {
    /// Creates the constraint.
    pub fn new() -> Self {
        Self {
            metadata: resources::IS_INSTANCE_OF,
            _types: PhantomData,
        }
    }
}

impl<I, O> Default for IsInstanceOf<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for IsInstanceOf<I, O> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            _types: PhantomData,
        }
    }
}

impl<I, O> fmt::Debug for IsInstanceOf<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsInstanceOf")
            .field("name", self.metadata.name())
            .field("type", &type_name::<O>())
            .finish()
    }
}

impl<I, O> Describe for IsInstanceOf<I, O> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        write_type::<O>(arguments);
    }
}

impl<I: Narrow<O>, O: Value> Constraint for IsInstanceOf<I, O> {
    type Input = I;
    type Output = O;

    fn apply(&self, value: &I) -> Option<O> {
        value.narrow()
    }

    fn invert(&self) -> Result<SharedConstraint<I>, ConstraintError> {
        Ok(Arc::new(IsNotInstanceOf::<I, O>::new()))
    }
}

impl<I, O> Rename for IsInstanceOf<I, O> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            _types: PhantomData,
        }
    }
}

/// Creates a constraint narrowing an `I` to an `O`.
pub fn is_instance_of<I: Narrow<O>, O: Value>() -> IsInstanceOf<I, O> {
    IsInstanceOf::new()
}

// ============================================================================
// IS NOT INSTANCE OF
// ============================================================================

/// Accepts values not holding an `O`.
pub struct IsNotInstanceOf<I, O> {
    metadata: ConstraintMetadata,
    _types: PhantomData<fn() -> (I, O)>,
}

impl<I, O> IsNotInstanceOf<I, O> {
    /// Creates the constraint.
    pub fn new() -> Self {
        Self {
            metadata: resources::IS_NOT_INSTANCE_OF,
            _types: PhantomData,
        }
    }
}

impl<I, O> Default for IsNotInstanceOf<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for IsNotInstanceOf<I, O> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            _types: PhantomData,
        }
    }
}

impl<I, O> fmt::Debug for IsNotInstanceOf<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsNotInstanceOf")
            .field("name", self.metadata.name())
            .field("type", &type_name::<O>())
            .finish()
    }
}

impl<I, O> Describe for IsNotInstanceOf<I, O> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        write_type::<O>(arguments);
    }
}

impl<I: Narrow<O>, O: Value> Constraint for IsNotInstanceOf<I, O> {
    type Input = I;
    type Output = I;

    fn apply(&self, value: &I) -> Option<I> {
        value.narrow().is_none().then(|| value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<I>, ConstraintError> {
        let inverse = Inverted::new(self.clone()).with_metadata(resources::IS_INSTANCE_OF);
        Ok(Arc::new(inverse))
    }
}

impl<I, O> Rename for IsNotInstanceOf<I, O> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            _types: PhantomData,
        }
    }
}

/// Creates a constraint rejecting an `I` that holds an `O`.
pub fn is_not_instance_of<I: Narrow<O>, O: Value>() -> IsNotInstanceOf<I, O> {
    IsNotInstanceOf::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::is_greater_than;
    use crate::foundation::ConstraintExt;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        last_digits: u16,
    }

    fn card() -> AnyValue {
        Arc::new(Card { last_digits: 4242 })
    }

    #[test]
    fn test_instance_of_narrows() {
        let constraint = is_instance_of::<AnyValue, Card>();
        assert_eq!(constraint.apply(&card()), Some(Card { last_digits: 4242 }));
        assert_eq!(constraint.apply(&(Arc::new(3_u8) as AnyValue)), None);
    }

    #[test]
    fn test_instance_of_message_names_type() {
        let error = is_instance_of::<AnyValue, Card>()
            .evaluate(&(Arc::new("text") as AnyValue))
            .unwrap_err();
        assert_eq!(error.argument("type"), Some(&Argument::text("Card")));
        assert!(error.to_string().ends_with("must be an instance of Card"));
    }

    #[test]
    fn test_instance_pair_inverts() {
        let not_card = is_instance_of::<AnyValue, Card>().invert().unwrap();
        assert_eq!(not_card.name(), "is_not_instance_of");
        assert!(!not_card.is_satisfied_by(&card()));

        let card_again = not_card.invert().unwrap();
        assert_eq!(card_again.name(), "is_instance_of");
        assert!(card_again.is_satisfied_by(&card()));
    }

    #[test]
    fn test_narrowed_value_feeds_the_chain() {
        let constraint = is_instance_of::<AnyValue, u32>().and(is_greater_than(10_u32));
        assert!(constraint.is_satisfied_by(&(Arc::new(11_u32) as AnyValue)));
        assert!(!constraint.is_satisfied_by(&(Arc::new(9_u32) as AnyValue)));
        assert!(!constraint.is_satisfied_by(&(Arc::new(11_i64) as AnyValue)));
    }
}
