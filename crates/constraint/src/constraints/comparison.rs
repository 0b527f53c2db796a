//! Equality and ordering constraints
//!
//! Each constraint here has a dedicated dual, so inverting never falls back
//! to the generic negation:
//!
//! | constraint                    | inverse                       |
//! |-------------------------------|-------------------------------|
//! | `is_equal_to`                 | `is_not_equal_to`             |
//! | `is_greater_than`             | `is_smaller_than_or_equal_to` |
//! | `is_smaller_than`             | `is_greater_than_or_equal_to` |

use crate::foundation::Value;
use crate::message::{ToArgument, resources};

// ============================================================================
// BOUNDS
// ============================================================================

/// Values that can be compared with equality.
pub trait Equatable: Value + PartialEq + ToArgument {}

impl<T> Equatable for T where T: Value + PartialEq + ToArgument {}

/// Values that can be ordered.
///
/// Incomparable pairs (e.g. `NaN`) satisfy none of the ordering constraints.
pub trait Comparable: Value + PartialOrd + ToArgument {}

impl<T> Comparable for T where T: Value + PartialOrd + ToArgument {}

// ============================================================================
// EQUALITY
// ============================================================================

crate::constraint! {
    /// Accepts values equal to `other`.
    pub IsEqualTo<T: Equatable> { other: T } for T;
    metadata: resources::IS_EQUAL_TO;
    rule(self, input) { *input == self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsNotEqualTo::new(self.other.clone()) }
    fn is_equal_to(other: T);
}

crate::constraint! {
    /// Accepts values different from `other`.
    pub IsNotEqualTo<T: Equatable> { other: T } for T;
    metadata: resources::IS_NOT_EQUAL_TO;
    rule(self, input) { *input != self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsEqualTo::new(self.other.clone()) }
    fn is_not_equal_to(other: T);
}

// ============================================================================
// ORDERING
// ============================================================================

crate::constraint! {
    /// Accepts values strictly greater than `other`.
    pub IsGreaterThan<T: Comparable> { other: T } for T;
    metadata: resources::IS_GREATER_THAN;
    rule(self, input) { *input > self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsSmallerThanOrEqualTo::new(self.other.clone()) }
    fn is_greater_than(other: T);
}

crate::constraint! {
    /// Accepts values greater than or equal to `other`.
    pub IsGreaterThanOrEqualTo<T: Comparable> { other: T } for T;
    metadata: resources::IS_GREATER_THAN_OR_EQUAL_TO;
    rule(self, input) { *input >= self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsSmallerThan::new(self.other.clone()) }
    fn is_greater_than_or_equal_to(other: T);
}

crate::constraint! {
    /// Accepts values strictly smaller than `other`.
    pub IsSmallerThan<T: Comparable> { other: T } for T;
    metadata: resources::IS_SMALLER_THAN;
    rule(self, input) { *input < self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsGreaterThanOrEqualTo::new(self.other.clone()) }
    fn is_smaller_than(other: T);
}

crate::constraint! {
    /// Accepts values smaller than or equal to `other`.
    pub IsSmallerThanOrEqualTo<T: Comparable> { other: T } for T;
    metadata: resources::IS_SMALLER_THAN_OR_EQUAL_TO;
    rule(self, input) { *input <= self.other }
    arguments(self, args) { args.insert("other", self.other.to_argument()); }
    invert(self) { IsGreaterThan::new(self.other.clone()) }
    fn is_smaller_than_or_equal_to(other: T);
}

// ============================================================================
// TESTS
// ============================================================================
