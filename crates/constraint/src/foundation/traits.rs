//! Core traits for the constraint system
//!
//! This module defines the contract every constraint implements, the
//! visitor used to inspect composed constraint trees, and the fluent
//! extension methods for composing constraints.

use std::sync::Arc;

use crate::combinators::{And, Inverted, Or};
use crate::foundation::{ConstraintError, ConstraintMetadata, Identifier, StringTemplate, Value};
use crate::message::{ErrorMessage, ErrorMessageBuilder, MessageArguments};

// ============================================================================
// DESCRIBE
// ============================================================================

/// Shape of a constraint as seen by a [`ConstraintVisitor`].
pub enum ConstraintNode<'a> {
    /// A plain constraint with no children.
    Leaf,
    /// Two constraints evaluated in sequence.
    And(&'a dyn Describe, &'a dyn Describe),
    /// Alternatives, the first success wins.
    Or(Vec<&'a dyn Describe>),
    /// A negated constraint.
    Not(&'a dyn Describe),
}

/// The type-erased half of a constraint: its metadata, the arguments it
/// contributes to error messages and its place in a composed tree.
///
/// Kept separate from [`Constraint`] so heterogeneous trees can be walked
/// without knowing the input and output types of every node.
pub trait Describe: AsDescribe + Send + Sync {
    /// Name and error message template.
    fn metadata(&self) -> &ConstraintMetadata;

    /// The constraint name.
    fn name(&self) -> &Identifier {
        self.metadata().name()
    }

    /// The error message template.
    fn error_message(&self) -> &StringTemplate {
        self.metadata().error_message()
    }

    /// Writes the named arguments this constraint exposes to its template,
    /// e.g. `other` for comparisons.
    fn write_arguments(&self, _arguments: &mut MessageArguments) {}

    /// Returns the shape of this constraint for visitors.
    fn node(&self) -> ConstraintNode<'_> {
        ConstraintNode::Leaf
    }
}

/// Upcast to `&dyn Describe`, implemented for every sized [`Describe`].
pub trait AsDescribe {
    /// Returns `self` as a trait object.
    fn as_describe(&self) -> &dyn Describe;
}

impl<D: Describe> AsDescribe for D {
    fn as_describe(&self) -> &dyn Describe {
        self
    }
}

// ============================================================================
// VISITOR
// ============================================================================

/// Visits the nodes of a composed constraint tree.
///
/// Default methods descend into every child, so an implementation only has
/// to handle the nodes it cares about.
pub trait ConstraintVisitor {
    /// Called for every leaf constraint.
    fn visit_leaf(&mut self, constraint: &dyn Describe);

    /// Called for an AND node.
    fn visit_and(&mut self, _constraint: &dyn Describe, left: &dyn Describe, right: &dyn Describe) {
        walk(self, left);
        walk(self, right);
    }

    /// Called for an OR node.
    fn visit_or(&mut self, _constraint: &dyn Describe, children: &[&dyn Describe]) {
        for child in children {
            walk(self, *child);
        }
    }

    /// Called for a NOT node.
    fn visit_not(&mut self, _constraint: &dyn Describe, inner: &dyn Describe) {
        walk(self, inner);
    }
}

/// Dispatches `constraint` to the matching visitor method.
pub fn walk<V: ConstraintVisitor + ?Sized>(visitor: &mut V, constraint: &dyn Describe) {
    match constraint.node() {
        ConstraintNode::Leaf => visitor.visit_leaf(constraint),
        ConstraintNode::And(left, right) => visitor.visit_and(constraint, left, right),
        ConstraintNode::Or(children) => visitor.visit_or(constraint, &children),
        ConstraintNode::Not(inner) => visitor.visit_not(constraint, inner),
    }
}

// ============================================================================
// CORE CONSTRAINT TRAIT
// ============================================================================

/// A shared, type-erased constraint.
pub type SharedConstraint<I, O = I> = Arc<dyn Constraint<Input = I, Output = O>>;

/// The core trait that all constraints implement.
///
/// A constraint checks an `Input` and, when satisfied, yields an `Output`.
/// Plain predicates return their input unchanged (`Output = Input`); filters
/// narrow it, e.g. `Option<T>` to `T`. An unsatisfied constraint yields no
/// output at all, whether the predicate failed or the conversion did.
///
/// Validation failure is never an `Err` of [`ConstraintError`]: it is the
/// [`ErrorMessage`] returned by [`evaluate`](Constraint::evaluate).
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let adult = is_greater_than_or_equal_to(18);
/// assert!(adult.is_satisfied_by(&21));
///
/// let error = adult.evaluate(&16).unwrap_err();
/// assert_eq!(error.to_string(), "Value must be greater than or equal to 18");
/// ```
pub trait Constraint: Describe {
    /// The type being checked.
    type Input: Value;

    /// The type produced when the constraint is satisfied.
    type Output: Value;

    /// Checks `value`, returning the output when satisfied.
    fn apply(&self, value: &Self::Input) -> Option<Self::Output>;

    /// Returns `true` if `value` satisfies this constraint.
    fn is_satisfied_by(&self, value: &Self::Input) -> bool {
        self.apply(value).is_some()
    }

    /// Checks `value`, returning the output or the error message describing
    /// the failure.
    fn evaluate(&self, value: &Self::Input) -> Result<Self::Output, ErrorMessage> {
        self.apply(value).ok_or_else(|| self.error_for(value))
    }

    /// Returns the error message if `value` does not satisfy this constraint.
    fn is_not_satisfied_by(&self, value: &Self::Input) -> Option<ErrorMessage> {
        self.evaluate(value).err()
    }

    /// Builds the error message reported when `value` fails this constraint.
    fn error_for(&self, value: &Self::Input) -> ErrorMessage {
        ErrorMessageBuilder::new(self.as_describe(), value).build()
    }

    /// Returns the logical complement of this constraint.
    ///
    /// The default reports the operation as unsupported.
    fn invert(&self) -> Result<SharedConstraint<Self::Input>, ConstraintError> {
        Err(ConstraintError::unsupported(self.name().as_str(), "inversion"))
    }
}

impl<C: Describe + ?Sized> Describe for Arc<C> {
    fn metadata(&self) -> &ConstraintMetadata {
        (**self).metadata()
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        (**self).write_arguments(arguments);
    }

    fn node(&self) -> ConstraintNode<'_> {
        (**self).node()
    }
}

impl<C: Constraint + ?Sized> Constraint for Arc<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn apply(&self, value: &Self::Input) -> Option<Self::Output> {
        (**self).apply(value)
    }

    fn is_satisfied_by(&self, value: &Self::Input) -> bool {
        (**self).is_satisfied_by(value)
    }

    fn evaluate(&self, value: &Self::Input) -> Result<Self::Output, ErrorMessage> {
        (**self).evaluate(value)
    }

    fn error_for(&self, value: &Self::Input) -> ErrorMessage {
        (**self).error_for(value)
    }

    fn invert(&self) -> Result<SharedConstraint<Self::Input>, ConstraintError> {
        (**self).invert()
    }
}

// ============================================================================
// RENAME
// ============================================================================

/// Copy-on-write replacement of a constraint's name and template.
///
/// Every method leaves `self` untouched and returns a new constraint with the
/// same behavior.
pub trait Rename: Describe + Sized {
    /// Returns a copy carrying `metadata`.
    #[must_use = "renaming returns a new constraint"]
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self;

    /// Returns a copy named `name`.
    #[must_use = "renaming returns a new constraint"]
    fn with_name(&self, name: Identifier) -> Self {
        self.with_metadata(self.metadata().clone().with_name(name))
    }

    /// Returns a copy reporting failures with `error_message`.
    #[must_use = "renaming returns a new constraint"]
    fn with_error_message(&self, error_message: StringTemplate) -> Self {
        self.with_metadata(self.metadata().clone().with_error_message(error_message))
    }
}

// ============================================================================
// CONSTRAINT EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for constraints.
///
/// Automatically implemented for every [`Constraint`].
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let present_and_positive = is_not_null::<i32>().and(is_greater_than(0));
/// assert!(present_and_positive.is_satisfied_by(&Some(3)));
/// assert!(!present_and_positive.is_satisfied_by(&None));
/// ```
pub trait ConstraintExt: Constraint + Sized {
    /// Chains `next` after `self`, feeding it this constraint's output.
    ///
    /// `next` is only evaluated when `self` is satisfied.
    fn and<R>(self, next: R) -> And<Self, R>
    where
        R: Constraint<Input = Self::Output>,
    {
        And::new(self, next)
    }

    /// Accepts values satisfying `self` or `other`.
    fn or<R>(self, other: R) -> Or<Self::Input, Self::Output>
    where
        Self: 'static,
        R: Constraint<Input = Self::Input, Output = Self::Output> + 'static,
    {
        Or::new(self, other)
    }

    /// Negates `self` with the generic inverter.
    ///
    /// Prefer [`Constraint::invert`] where a dedicated complement exists.
    fn not(self) -> Inverted<Self> {
        Inverted::new(self)
    }

    /// Erases the concrete type.
    fn shared(self) -> SharedConstraint<Self::Input, Self::Output>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<C: Constraint> ConstraintExt for C {}
