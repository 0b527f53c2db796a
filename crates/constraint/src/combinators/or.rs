//! OR combinator - logical disjunction of constraints
//!
//! This module provides the [`Or`] combinator which accepts a value when at
//! least one of its alternatives does. Alternatives are evaluated in
//! registration order and the first success wins. When every alternative
//! fails, the error message carries each alternative's own failure.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let outside = is_smaller_than(0).or(is_greater_than(100));
//! assert!(outside.is_satisfied_by(&-1));
//! assert!(outside.is_satisfied_by(&101));
//!
//! let error = outside.evaluate(&50).unwrap_err();
//! assert_eq!(error.nested().len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::foundation::{
    AsDescribe, Constraint, ConstraintError, ConstraintMetadata, ConstraintNode, Describe, Rename,
    SharedConstraint, Value,
};
use crate::message::{ErrorMessage, ErrorMessageBuilder, resources};

/// Accepts a value satisfying any of two or more alternatives.
///
/// All alternatives share the same input and output types so that whichever
/// succeeds can hand its output on.
///
/// # Type Parameters
///
/// * `I` - The input type of every alternative
/// * `O` - The output type of every alternative
pub struct Or<I, O = I> {
    children: Vec<SharedConstraint<I, O>>,
    metadata: ConstraintMetadata,
}

impl<I: Value, O: Value> Or<I, O> {
    /// Creates a new `Or` combinator from two alternatives.
    pub fn new<A, B>(first: A, second: B) -> Self
    where
        A: Constraint<Input = I, Output = O> + 'static,
        B: Constraint<Input = I, Output = O> + 'static,
    {
        let first: SharedConstraint<I, O> = Arc::new(first);
        let second: SharedConstraint<I, O> = Arc::new(second);
        Self {
            children: vec![first, second],
            metadata: resources::OR,
        }
    }

    /// Adds another alternative, evaluated after the existing ones.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use nebula_constraint::prelude::*;
    ///
    /// let constraint = is_equal_to(1).or(is_equal_to(2)).or(is_equal_to(3));
    /// assert_eq!(constraint.len(), 3);
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn or<C>(mut self, other: C) -> Self
    where
        C: Constraint<Input = I, Output = O> + 'static,
    {
        let other: SharedConstraint<I, O> = Arc::new(other);
        self.children.push(other);
        self
    }

    /// Returns the alternatives in evaluation order.
    pub fn children(&self) -> &[SharedConstraint<I, O>] {
        &self.children
    }

    /// Number of alternatives, always at least two.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; an `Or` has at least two alternatives.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<I, O> Clone for Or<I, O> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Or<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("name", self.metadata.name())
            .field(
                "children",
                &self.children.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<I: Value, O: Value> Describe for Or<I, O> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn node(&self) -> ConstraintNode<'_> {
        ConstraintNode::Or(self.children.iter().map(|c| c.as_describe()).collect())
    }
}

impl<I: Value, O: Value> Constraint for Or<I, O> {
    type Input = I;
    type Output = O;

    fn apply(&self, value: &I) -> Option<O> {
        self.children.iter().find_map(|child| child.apply(value))
    }

    fn evaluate(&self, value: &I) -> Result<O, ErrorMessage> {
        let mut failures = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match child.evaluate(value) {
                Ok(output) => return Ok(output),
                Err(error) => failures.push(error),
            }
        }
        Err(ErrorMessageBuilder::new(self, value).nested(failures).build())
    }

    fn error_for(&self, value: &I) -> ErrorMessage {
        match self.evaluate(value) {
            Err(error) => error,
            Ok(_) => ErrorMessageBuilder::new(self, value).build(),
        }
    }
}

impl<I: Value, O: Value> Rename for Or<I, O> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            children: self.children.clone(),
            metadata,
        }
    }
}

/// Creates an `Or` combinator from two constraints.
pub fn or<I, O, A, B>(first: A, second: B) -> Or<I, O>
where
    I: Value,
    O: Value,
    A: Constraint<Input = I, Output = O> + 'static,
    B: Constraint<Input = I, Output = O> + 'static,
{
    Or::new(first, second)
}

/// Combines any number of shared constraints with OR.
///
/// A single constraint is returned as-is, since an alternative of one is the
/// constraint itself. An empty list is a programming error.
pub fn any_of<I: Value, O: Value>(
    mut constraints: Vec<SharedConstraint<I, O>>,
) -> Result<SharedConstraint<I, O>, ConstraintError> {
    match constraints.len() {
        0 => Err(ConstraintError::EmptyComposite { constraint: "or" }),
        1 => Ok(constraints.remove(0)),
        _ => Ok(Arc::new(Or {
            children: constraints,
            metadata: resources::OR,
        })),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::constraints::{is_equal_to, is_greater_than, is_smaller_than};
    use crate::foundation::ConstraintExt;
    use crate::message::Argument;

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
    fn test_or_stops_at_first_success() {
        let spy = Spy::new();
        let constraint = is_greater_than(0).or(spy.clone());

        assert!(constraint.is_satisfied_by(&5));
        assert_eq!(constraint.apply(&5), Some(5));
        assert_eq!(constraint.evaluate(&5), Ok(5));
        assert_eq!(spy.calls(), 0);

        assert_eq!(constraint.evaluate(&-5), Ok(-5));
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn test_or_first_alternative() {
        let constraint = or(is_smaller_than(0), is_greater_than(10));
        assert!(constraint.is_satisfied_by(&-1));
    }

    #[test]
    fn test_or_second_alternative() {
        let constraint = or(is_smaller_than(0), is_greater_than(10));
        assert!(constraint.is_satisfied_by(&11));
    }

    #[test]
    fn test_or_all_fail_reports_every_alternative() {
        let constraint = or(is_smaller_than(0), is_greater_than(10));
        let error = constraint.evaluate(&5).unwrap_err();

        assert_eq!(error.constraint_name(), "or");
        let nested: Vec<_> = error.nested().iter().map(|e| e.constraint_name().as_str()).collect();
        assert_eq!(nested, vec!["is_smaller_than", "is_greater_than"]);
        assert_eq!(
            error.to_string(),
            "Value must satisfy at least one of is_smaller_than, is_greater_than \
             (Value must be smaller than 0, Value must be greater than 10)"
        );
    }

    #[test]
    fn test_or_chaining_flattens() {
        let constraint = is_equal_to(1).or(is_equal_to(2)).or(is_equal_to(3));
        assert_eq!(constraint.len(), 3);
        assert!(constraint.is_satisfied_by(&3));
        assert!(!constraint.is_satisfied_by(&4));
        assert_eq!(
            constraint.evaluate(&4).unwrap_err().argument("constraints"),
            Some(&Argument::List(vec![Argument::text("is_equal_to"); 3]))
        );
    }

    #[test]
    fn test_any_of_single_is_passthrough() {
        let only = is_greater_than(1).shared();
        let constraint = any_of(vec![only.clone()]).unwrap();
        assert!(Arc::ptr_eq(&only, &constraint));
    }

    #[test]
    fn test_any_of_empty_is_error() {
        let error = any_of::<i32, i32>(Vec::new()).err().unwrap();
        assert_eq!(error, ConstraintError::EmptyComposite { constraint: "or" });
    }

    #[test]
    fn test_any_of_many() {
        let constraint = any_of(vec![is_equal_to(1).shared(), is_equal_to(5).shared()]).unwrap();
        assert!(constraint.is_satisfied_by(&5));
        assert!(!constraint.is_satisfied_by(&2));
        assert_eq!(constraint.name(), "or");
    }

    #[test]
    fn test_or_invert_is_unsupported() {
        let constraint = or(is_smaller_than(0), is_greater_than(10));
        assert!(constraint.invert().err().unwrap().is_unsupported());
    }
}
