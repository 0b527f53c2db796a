//! Inclusive range constraints

use serde::Serialize;

use super::Comparable;
use crate::foundation::ConstraintError;
use crate::message::{Argument, ToArgument, resources};

// ============================================================================
// RANGE
// ============================================================================

/// An inclusive range `[lower, upper]`.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::constraints::Range;
///
/// let adult = Range::new(18, 130)?;
/// assert!(adult.contains(&18));
/// assert!(Range::new(10, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    lower: T,
    upper: T,
}

impl<T: Comparable> Range<T> {
    /// Creates the range `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if `lower` is greater than
    /// `upper` or the bounds are incomparable.
    pub fn new(lower: T, upper: T) -> Result<Self, ConstraintError> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(ConstraintError::invalid_range(&lower, &upper))
        }
    }

    /// Returns `true` if `value` lies within the bounds, both included.
    pub fn contains(&self, value: &T) -> bool {
        self.lower <= *value && *value <= self.upper
    }
}

impl<T> Range<T> {
    /// The lower bound.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The upper bound.
    pub fn upper(&self) -> &T {
        &self.upper
    }
}

impl<T: ToArgument> ToArgument for Range<T> {
    fn to_argument(&self) -> Argument {
        Argument::range(self.lower.to_argument(), self.upper.to_argument())
    }
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

crate::constraint! {
    /// Accepts values within an inclusive range.
    pub IsInRange<T: Comparable> { range: Range<T> } for T;
    metadata: resources::IS_IN_RANGE;
    rule(self, input) { self.range.contains(input) }
    arguments(self, args) {
        args.insert("range", self.range.to_argument());
        args.insert("lower", self.range.lower.to_argument());
        args.insert("upper", self.range.upper.to_argument());
    }
    invert(self) { IsNotInRange::new(self.range.clone()) }
    fn is_in_range(range: Range<T>);
}

crate::constraint! {
    /// Accepts values outside of an inclusive range.
    pub IsNotInRange<T: Comparable> { range: Range<T> } for T;
    metadata: resources::IS_NOT_IN_RANGE;
    rule(self, input) { !self.range.contains(input) }
    arguments(self, args) {
        args.insert("range", self.range.to_argument());
        args.insert("lower", self.range.lower.to_argument());
        args.insert("upper", self.range.upper.to_argument());
    }
    invert(self) { IsInRange::new(self.range.clone()) }
    fn is_not_in_range(range: Range<T>);
}

// ============================================================================
// TESTS
// ============================================================================
