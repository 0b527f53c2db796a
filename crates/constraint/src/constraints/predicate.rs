//! Constraints from arbitrary predicates

use std::fmt;
use std::sync::Arc;

use crate::combinators::Inverted;
use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, Describe, Identifier, Rename,
    SharedConstraint, Value,
};
use crate::message::resources;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Accepts values for which a predicate returns `true`.
///
/// Predicates have no dedicated dual; inverting one negates it.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let even = satisfies(|v: &i32| v % 2 == 0);
/// assert!(even.is_satisfied_by(&4));
/// ```
pub struct Satisfies<T> {
    predicate: Predicate<T>,
    metadata: ConstraintMetadata,
}

impl<T> Satisfies<T> {
    /// Wraps `predicate`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            metadata: resources::SATISFIES,
        }
    }
}

impl<T> Clone for Satisfies<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            metadata: self.metadata.clone(),
        }
    }
}

impl<T> fmt::Debug for Satisfies<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("name", self.metadata.name())
            .finish_non_exhaustive()
    }
}

impl<T> Describe for Satisfies<T> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }
}

impl<T: Value> Constraint for Satisfies<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        (self.predicate)(value).then(|| value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<T>, ConstraintError> {
        Ok(Arc::new(Inverted::new(self.clone())))
    }
}

impl<T> Rename for Satisfies<T> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            metadata,
        }
    }
}

/// Creates a constraint from `predicate`.
pub fn satisfies<T, F>(predicate: F) -> Satisfies<T>
where
    T: Value,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Satisfies::new(predicate)
}

/// Creates a constraint from `predicate`, reported under `name`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidIdentifier`] if `name` is not a valid
/// identifier.
pub fn satisfies_named<T, F>(
    name: impl Into<std::borrow::Cow<'static, str>>,
    predicate: F,
) -> Result<Satisfies<T>, ConstraintError>
where
    T: Value,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Ok(Satisfies::new(predicate).with_name(Identifier::new(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies() {
        let even = satisfies(|v: &i32| v % 2 == 0);
        assert_eq!(even.apply(&4), Some(4));
        assert!(!even.is_satisfied_by(&3));
        assert_eq!(
            even.evaluate(&3).unwrap_err().to_string(),
            "Value does not satisfy the required condition"
        );
    }

    #[test]
    fn test_satisfies_inverts_generically() {
        let odd = satisfies(|v: &i32| v % 2 == 0).invert().unwrap();
        assert_eq!(odd.name(), "not");
        assert!(odd.is_satisfied_by(&3));
    }

    #[test]
    fn test_satisfies_named() {
        let even = satisfies_named("is_even", |v: &i32| v % 2 == 0).unwrap();
        assert_eq!(even.evaluate(&1).unwrap_err().constraint_name(), "is_even");
        assert!(satisfies_named("is even", |v: &i32| *v > 0).is_err());
    }
}
