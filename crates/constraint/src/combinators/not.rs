//! NOT combinator - logical negation of constraints
//!
//! This module provides the [`Inverted`] combinator, the generic complement
//! used when a constraint has no dedicated dual. It succeeds exactly when
//! the inner constraint fails and hands its input on unchanged.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::prelude::*;
//!
//! let odd = satisfies(|v: &i32| v % 2 == 0).not();
//! assert!(odd.is_satisfied_by(&3));
//!
//! let error = odd.evaluate(&4).unwrap_err();
//! assert_eq!(error.to_string(), "Value must not satisfy satisfies");
//! ```

use std::sync::Arc;

use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, ConstraintNode, Describe, Rename,
    SharedConstraint,
};
use crate::message::{Argument, MessageArguments, resources};

/// Inverts a constraint with logical NOT.
///
/// An `Inverted` is either negating (the usual case, reported as `not`) or
/// the double inversion of a negation, which behaves like the inner
/// constraint again. Inverting flips between the two, so
/// `c.not().invert()` accepts exactly what `c` accepts.
///
/// # Type Parameters
///
/// * `C` - The inner constraint type
#[derive(Debug, Clone)]
pub struct Inverted<C> {
    /// The inner constraint.
    pub(crate) inner: C,
    negated: bool,
    metadata: ConstraintMetadata,
}

impl<C> Inverted<C> {
    /// Creates a new negation of `inner`.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            negated: true,
            metadata: resources::NOT,
        }
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Returns `true` while this negates the inner constraint.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Extracts the inner constraint.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Describe> Describe for Inverted<C> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        if self.negated {
            arguments.insert("constraint", Argument::text(self.inner.name().to_string()));
        }
        self.inner.write_arguments(arguments);
    }

    fn node(&self) -> ConstraintNode<'_> {
        if self.negated {
            ConstraintNode::Not(&self.inner)
        } else {
            self.inner.node()
        }
    }
}

impl<C> Constraint for Inverted<C>
where
    C: Constraint + Clone + 'static,
{
    type Input = C::Input;
    type Output = C::Input;

    fn apply(&self, value: &Self::Input) -> Option<Self::Output> {
        (self.inner.is_satisfied_by(value) != self.negated).then(|| value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<Self::Input>, ConstraintError> {
        let metadata = if self.negated {
            self.inner.metadata().clone()
        } else {
            resources::NOT
        };
        Ok(Arc::new(Self {
            inner: self.inner.clone(),
            negated: !self.negated,
            metadata,
        }))
    }
}

impl<C: Describe + Clone> Rename for Inverted<C> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }
}

/// Creates an `Inverted` combinator from a constraint.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::combinators::not;
/// use nebula_constraint::prelude::*;
///
/// let constraint = not(is_equal_to(0));
/// assert!(constraint.is_satisfied_by(&1));
/// ```
pub fn not<C: Constraint>(constraint: C) -> Inverted<C> {
    Inverted::new(constraint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{is_greater_than, satisfies};
    use crate::foundation::{ConstraintExt, StringTemplate};

    #[test]
    fn test_not_inverts_success() {
        let constraint = not(is_greater_than(10));
        assert!(!constraint.is_satisfied_by(&11));
        assert_eq!(constraint.apply(&3), Some(3));
    }

    #[test]
    fn test_not_message_names_inner_constraint() {
        let constraint = is_greater_than(10).not();
        let error = constraint.evaluate(&11).unwrap_err();

        assert_eq!(error.constraint_name(), "not");
        assert_eq!(error.argument("constraint"), Some(&Argument::text("is_greater_than")));
        assert_eq!(error.argument("other"), Some(&Argument::Integer(10)));
        assert_eq!(error.to_string(), "Value must not satisfy is_greater_than");
    }

    #[test]
    fn test_double_inversion_restores_behavior_and_name() {
        let even = satisfies(|v: &i32| v % 2 == 0);
        let odd = even.clone().not();
        let back = odd.invert().unwrap();

        for value in -3..=3 {
            assert_eq!(back.is_satisfied_by(&value), even.is_satisfied_by(&value));
            assert_ne!(odd.is_satisfied_by(&value), even.is_satisfied_by(&value));
        }
        assert_eq!(back.name(), "satisfies");
        assert_eq!(back.invert().unwrap().name(), "not");
    }

    #[test]
    fn test_node_is_not_while_negated() {
        let constraint = is_greater_than(0).not();
        assert!(matches!(constraint.node(), ConstraintNode::Not(_)));
        assert!(constraint.is_negated());
        assert_eq!(constraint.inner().name(), "is_greater_than");
    }

    #[test]
    fn test_rename_replaces_template() {
        let template = StringTemplate::new("{member} must be at most {other}").unwrap();
        let constraint = is_greater_than(5).not().with_error_message(template);
        let error = constraint.evaluate(&6).unwrap_err();
        assert_eq!(error.to_string(), "Value must be at most 5");
    }
}
