//! Macros for creating constraints with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`] - Create a complete constraint (struct + `Describe`,
//!   `Constraint` and `Rename` impls + factory fn)
//! - [`compose!`] - AND-chain multiple constraints
//! - [`any_of!`] - OR-chain multiple constraints
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::constraint;
//!
//! constraint! {
//!     /// Accepts multiples of a divisor.
//!     pub IsMultipleOf<T: Integral> { divisor: T } for T;
//!     metadata: MULTIPLE_OF;
//!     rule(self, input) { *input % self.divisor == T::default() }
//!     arguments(self, args) { args.insert("divisor", self.divisor.to_argument()); }
//!     invert(self) { Inverted::new(self.clone()) }
//!     fn is_multiple_of(divisor: T);
//! }
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a complete predicate constraint: struct definition, `Describe`,
/// `Constraint` and `Rename` implementations, constructor, and factory
/// function.
///
/// The generated constraint hands its input on unchanged when the rule
/// holds. `#[derive(Debug, Clone)]` is always applied. The struct carries
/// its [`ConstraintMetadata`](crate::foundation::ConstraintMetadata),
/// initialized from `metadata:`, and `invert` must produce the dual
/// constraint.
///
/// # Variants
///
/// **Phantom generic unit** (no parameters):
/// ```rust,ignore
/// constraint! {
///     pub IsNull<T: Value> for Option<T>;
///     metadata: resources::IS_NULL;
///     rule(input) { input.is_none() }
///     invert(self) { Inverted::new(self.clone()).with_metadata(resources::IS_NOT_NULL) }
///     fn is_null();
/// }
/// ```
///
/// **Generic struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// constraint! {
///     pub IsGreaterThan<T: Comparable> { other: T } for T;
///     metadata: resources::IS_GREATER_THAN;
///     rule(self, input) { *input > self.other }
///     arguments(self, args) { args.insert("other", self.other.to_argument()); }
///     invert(self) { IsSmallerThanOrEqualTo::new(self.other.clone()) }
///     fn is_greater_than(other: T);
/// }
/// ```
///
/// Bounds must be simple identifiers (use imports for paths).
#[macro_export]
macro_rules! constraint {
    // ── Internal: trait impls shared by the struct variants ─────────────
    (
        @impls $name:ident<$tp:ident: $first_bound:ident $(+ $rest_bound:ident)*> for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        arguments($self2:ident, $args:ident) $arguments:block
        invert($self3:ident) $invert:block
    ) => {
        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Describe for $name<$tp> {
            fn metadata(&self) -> &$crate::foundation::ConstraintMetadata {
                &self.metadata
            }

            fn write_arguments(&$self2, $args: &mut $crate::message::MessageArguments) $arguments
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Constraint for $name<$tp> {
            type Input = $input;
            type Output = $input;

            fn apply(&$self_, $inp: &Self::Input) -> ::std::option::Option<Self::Output> {
                if $rule {
                    ::std::option::Option::Some(::std::clone::Clone::clone($inp))
                } else {
                    ::std::option::Option::None
                }
            }

            fn invert(
                &$self3,
            ) -> ::std::result::Result<
                $crate::foundation::SharedConstraint<Self::Input>,
                $crate::foundation::ConstraintError,
            > {
                ::std::result::Result::Ok(::std::sync::Arc::new($invert))
            }
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Rename for $name<$tp> {
            fn with_metadata(&self, metadata: $crate::foundation::ConstraintMetadata) -> Self {
                Self {
                    metadata,
                    ..::std::clone::Clone::clone(self)
                }
            }
        }
    };

    // ── Variant 1: Phantom generic unit + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$tp:ident: $first_bound:ident $(+ $rest_bound:ident)*> for $input:ty;
        metadata: $metadata:expr;
        rule($inp:ident) $rule:block
        invert($self3:ident) $invert:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$tp> {
            metadata: $crate::foundation::ConstraintMetadata,
            _input: ::std::marker::PhantomData<fn() -> $tp>,
        }

        #[allow(clippy::new_without_default)]
        impl<$tp: $first_bound $(+ $rest_bound)*> $name<$tp> {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    metadata: $metadata,
                    _input: ::std::marker::PhantomData,
                }
            }
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Describe for $name<$tp> {
            fn metadata(&self) -> &$crate::foundation::ConstraintMetadata {
                &self.metadata
            }
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Constraint for $name<$tp> {
            type Input = $input;
            type Output = $input;

            fn apply(&self, $inp: &Self::Input) -> ::std::option::Option<Self::Output> {
                if $rule {
                    ::std::option::Option::Some(::std::clone::Clone::clone($inp))
                } else {
                    ::std::option::Option::None
                }
            }

            fn invert(
                &$self3,
            ) -> ::std::result::Result<
                $crate::foundation::SharedConstraint<Self::Input>,
                $crate::foundation::ConstraintError,
            > {
                ::std::result::Result::Ok(::std::sync::Arc::new($invert))
            }
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $crate::foundation::Rename for $name<$tp> {
            fn with_metadata(&self, metadata: $crate::foundation::ConstraintMetadata) -> Self {
                Self {
                    metadata,
                    _input: ::std::marker::PhantomData,
                }
            }
        }

        #[must_use]
        $vis fn $factory<$tp: $first_bound $(+ $rest_bound)*>() -> $name<$tp> {
            $name::new()
        }
    };

    // ── Variant 2: Generic struct with fields + auto new + factory fn ────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$tp:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        metadata: $metadata:expr;
        rule($self_:ident, $inp:ident) $rule:block
        arguments($self2:ident, $args:ident) $arguments:block
        invert($self3:ident) $invert:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$tp> {
            $(pub $field: $fty,)+
            metadata: $crate::foundation::ConstraintMetadata,
            _input: ::std::marker::PhantomData<fn() -> $tp>,
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $name<$tp> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self {
                    $($field,)+
                    metadata: $metadata,
                    _input: ::std::marker::PhantomData,
                }
            }
        }

        $crate::constraint! {
            @impls $name<$tp: $first_bound $(+ $rest_bound)*> for $input;
            rule($self_, $inp) $rule
            arguments($self2, $args) $arguments
            invert($self3) $invert
        }

        #[must_use]
        $vis fn $factory<$tp: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$tp> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3: Generic struct with fields + custom new + factory fn ──
    //
    // `new` lists an initializer per field; metadata is filled in.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$tp:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        metadata: $metadata:expr;
        rule($self_:ident, $inp:ident) $rule:block
        arguments($self2:ident, $args:ident) $arguments:block
        invert($self3:ident) $invert:block
        new($($narg:ident: $naty:ty),* $(,)?) { $($init_field:ident: $init:expr),+ $(,)? }
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$tp> {
            $(pub $field: $fty,)+
            metadata: $crate::foundation::ConstraintMetadata,
            _input: ::std::marker::PhantomData<fn() -> $tp>,
        }

        impl<$tp: $first_bound $(+ $rest_bound)*> $name<$tp> {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self {
                Self {
                    $($init_field: $init,)+
                    metadata: $metadata,
                    _input: ::std::marker::PhantomData,
                }
            }
        }

        $crate::constraint! {
            @impls $name<$tp: $first_bound $(+ $rest_bound)*> for $input;
            rule($self_, $inp) $rule
            arguments($self2, $args) $arguments
            invert($self3) $invert
        }

        #[must_use]
        $vis fn $factory<$tp: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$tp> {
            $name::new($($farg),*)
        }
    };

}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Chains multiple constraints using AND logic.
///
/// ```rust,ignore
/// let constraint = compose![is_not_null::<u32>(), is_greater_than(0), is_smaller_than(150)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::foundation::ConstraintExt::and($first, $crate::compose!($($rest),+))
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple constraints using OR logic.
///
/// ```rust,ignore
/// let constraint = any_of![is_equal_to(1), is_equal_to(2), is_equal_to(3)];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::combinators::Or::new($first, $second)$(.or($rest))*
    };
}

#[cfg(test)]
mod tests {
    use crate::constraints::{is_equal_to, is_greater_than, is_not_null, is_smaller_than};
    use crate::foundation::{Constraint, Describe};

    #[test]
    fn test_compose_chains_in_order() {
        let constraint = compose![is_not_null::<i32>(), is_greater_than(0), is_smaller_than(150)];
        assert!(constraint.is_satisfied_by(&Some(30)));
        assert!(!constraint.is_satisfied_by(&None));
        assert_eq!(constraint.evaluate(&Some(200)).unwrap_err().constraint_name(), "is_smaller_than");
    }

    #[test]
    fn test_any_of_flattens() {
        let constraint = any_of![is_equal_to(1), is_equal_to(2), is_equal_to(3)];
        assert_eq!(constraint.len(), 3);
        assert_eq!(constraint.name(), "or");
        assert!(constraint.is_satisfied_by(&2));
    }
}
