//! AND combinator - sequential composition of constraints
//!
//! This module provides the [`And`] combinator which chains two constraints:
//! the left constraint runs first and its output becomes the right
//! constraint's input. This is how filters narrow a value before the
//! predicates that need the narrowed type.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::combinators::And;
//! use nebula_constraint::prelude::*;
//!
//! // Option<u32> -> u32 -> u32
//! let constraint = And::new(is_not_null::<u32>(), is_greater_than(17));
//! assert!(constraint.is_satisfied_by(&Some(18)));
//! assert!(!constraint.is_satisfied_by(&None)); // fails is_not_null
//! assert!(!constraint.is_satisfied_by(&Some(3))); // fails is_greater_than
//! ```

use crate::foundation::{Constraint, ConstraintMetadata, ConstraintNode, Describe, Rename};
use crate::message::{ErrorMessage, ErrorMessageBuilder, resources};

/// Chains two constraints with logical AND.
///
/// The right constraint is only evaluated when the left one is satisfied,
/// and receives the left constraint's output. The reported error always
/// comes from the first failing link of the chain.
///
/// # Type Parameters
///
/// * `L` - The left (first) constraint type
/// * `R` - The right (second) constraint type, whose input is `L`'s output
#[derive(Debug, Clone)]
pub struct And<L, R> {
    /// The left (first) constraint.
    pub(crate) left: L,
    /// The right (second) constraint.
    pub(crate) right: R,
    metadata: ConstraintMetadata,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first constraint to apply
    /// * `right` - The constraint applied to the left constraint's output
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            metadata: resources::AND,
        }
    }

    /// Returns a reference to the left constraint.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right constraint.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right constraints.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Describe, R: Describe> Describe for And<L, R> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn node(&self) -> ConstraintNode<'_> {
        ConstraintNode::And(&self.left, &self.right)
    }
}

impl<L, R> Constraint for And<L, R>
where
    L: Constraint,
    R: Constraint<Input = L::Output>,
{
    type Input = L::Input;
    type Output = R::Output;

    fn apply(&self, value: &Self::Input) -> Option<Self::Output> {
        let intermediate = self.left.apply(value)?;
        self.right.apply(&intermediate)
    }

    fn evaluate(&self, value: &Self::Input) -> Result<Self::Output, ErrorMessage> {
        let intermediate = self.left.evaluate(value)?;
        self.right.evaluate(&intermediate)
    }

    fn error_for(&self, value: &Self::Input) -> ErrorMessage {
        match self.evaluate(value) {
            Err(error) => error,
            Ok(_) => ErrorMessageBuilder::new(self, value).build(),
        }
    }
}

impl<L: Describe + Clone, R: Describe + Clone> Rename for And<L, R> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }
}

/// Creates an `And` combinator from two constraints.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::combinators::and;
/// use nebula_constraint::prelude::*;
///
/// let constraint = and(is_greater_than(0), is_smaller_than(10));
/// assert!(constraint.is_satisfied_by(&5));
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Constraint,
    R: Constraint<Input = L::Output>,
{
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::constraints::{is_greater_than, is_not_null, is_smaller_than};
    use crate::foundation::{ConstraintExt, Identifier};

    /// Accepts everything and counts how often it was asked.
    #[derive(Clone)]
    struct Spy {
        calls: Arc<AtomicUsize>,
        metadata: ConstraintMetadata,
    }

    impl Spy {
        fn new() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                metadata: resources::IDENTITY,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Describe for Spy {
        fn metadata(&self) -> &ConstraintMetadata {
            &self.metadata
        }
    }

    impl Constraint for Spy {
        type Input = i32;
        type Output = i32;

        fn apply(&self, value: &i32) -> Option<i32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(*value)
        }
    }

    #[test]
    fn test_and_both_satisfied() {
        let constraint = And::new(is_greater_than(0), is_smaller_than(10));
        assert!(constraint.is_satisfied_by(&5));
    }

    #[test]
    fn test_and_left_fails() {
        let constraint = And::new(is_greater_than(0), is_smaller_than(10));
        let error = constraint.evaluate(&-1).unwrap_err();
        assert_eq!(error.constraint_name(), "is_greater_than");
    }

    #[test]
    fn test_and_right_fails() {
        let constraint = And::new(is_greater_than(0), is_smaller_than(10));
        let error = constraint.evaluate(&11).unwrap_err();
        assert_eq!(error.constraint_name(), "is_smaller_than");
    }

    #[test]
    fn test_and_short_circuits() {
        let spy = Spy::new();
        let constraint = And::new(is_greater_than(0), spy.clone());

        assert!(!constraint.is_satisfied_by(&-5));
        assert!(constraint.evaluate(&-5).is_err());
        assert_eq!(spy.calls(), 0);

        assert!(constraint.is_satisfied_by(&5));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn test_and_threads_filter_output() {
        let constraint = is_not_null::<i32>().and(is_greater_than(17));
        assert_eq!(constraint.apply(&Some(18)), Some(18));
        assert_eq!(constraint.apply(&Some(17)), None);
        assert_eq!(constraint.apply(&None), None);

        let error = constraint.evaluate(&None).unwrap_err();
        assert_eq!(error.constraint_name(), "is_not_null");
        let error = constraint.evaluate(&Some(3)).unwrap_err();
        assert_eq!(error.to_string(), "Value must be greater than 17");
    }

    #[test]
    fn test_and_error_for_reports_first_failing_link() {
        let constraint = and(is_greater_than(0), is_smaller_than(10));
        assert_eq!(constraint.error_for(&20).constraint_name(), "is_smaller_than");
    }

    #[test]
    fn test_and_invert_is_unsupported() {
        let constraint = and(is_greater_than(0), is_smaller_than(10));
        assert!(constraint.invert().err().unwrap().is_unsupported());
    }

    #[test]
    fn test_and_rename_keeps_behavior() {
        let constraint = and(is_greater_than(0), is_smaller_than(10));
        let renamed = constraint.with_name(Identifier::new("digit").unwrap());
        assert_eq!(renamed.name(), "digit");
        assert_eq!(renamed.is_satisfied_by(&3), constraint.is_satisfied_by(&3));
        assert_eq!(renamed.into_parts().0.name(), "is_greater_than");
    }
}
