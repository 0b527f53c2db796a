//! Built-in constraints
//!
//! Every constraint comes with a factory function named after it and knows
//! its dual, so [`invert`](crate::foundation::Constraint::invert) only falls
//! back to the generic negation for predicates.
//!
//! - **Comparison**: [`IsEqualTo`], [`IsNotEqualTo`], [`IsGreaterThan`],
//!   [`IsGreaterThanOrEqualTo`], [`IsSmallerThan`], [`IsSmallerThanOrEqualTo`]
//! - **Range**: [`IsInRange`], [`IsNotInRange`]
//! - **Null**: [`IsNotNull`] (narrows `Option<T>` to `T`), [`IsNull`]
//! - **Text**: [`IsNullOrEmpty`], [`IsNotNullOrEmpty`], [`Contains`],
//!   [`DoesNotContain`], [`MatchesPattern`], [`DoesNotMatchPattern`]
//! - **Collection**: [`IsEmpty`], [`IsNotEmpty`]
//! - **Type**: [`IsInstanceOf`] (narrows), [`IsNotInstanceOf`]
//! - **Predicate**: [`Satisfies`]

mod collection;
mod comparison;
mod instance;
mod null;
mod predicate;
mod range;
mod string;

pub use collection::{Collection, IsEmpty, IsNotEmpty, is_empty, is_not_empty};
pub use comparison::{
    Comparable, Equatable, IsEqualTo, IsGreaterThan, IsGreaterThanOrEqualTo, IsNotEqualTo,
    IsSmallerThan, IsSmallerThanOrEqualTo, is_equal_to, is_greater_than,
    is_greater_than_or_equal_to, is_not_equal_to, is_smaller_than, is_smaller_than_or_equal_to,
};
pub use instance::{
    AnyValue, IsInstanceOf, IsNotInstanceOf, Narrow, is_instance_of, is_not_instance_of,
};
pub use null::{IsNotNull, IsNull, is_not_null, is_null};
pub use predicate::{Satisfies, satisfies, satisfies_named};
pub use range::{IsInRange, IsNotInRange, Range, is_in_range, is_not_in_range};
pub use string::{
    Contains, DoesNotContain, DoesNotMatchPattern, IsNotNullOrEmpty, IsNullOrEmpty,
    MatchesPattern, TextValue, contains, does_not_contain, does_not_match_pattern,
    is_not_null_or_empty, is_null_or_empty, matches_pattern,
};
