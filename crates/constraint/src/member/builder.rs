//! Fluent registration of member constraint chains.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::entry::{Accessor, ChainEntry, Extractor, SequenceEntry, SharedEntry};
use super::{Member, MemberConstraintSet};
use crate::combinators::And;
use crate::constraints::{
    Collection, Comparable, Equatable, Narrow, Range, TextValue, contains, does_not_contain,
    does_not_match_pattern, is_empty, is_equal_to, is_greater_than, is_greater_than_or_equal_to,
    is_in_range, is_instance_of, is_not_empty, is_not_equal_to, is_not_in_range, is_not_null,
    is_not_null_or_empty, is_null, is_null_or_empty, is_smaller_than,
    is_smaller_than_or_equal_to, matches_pattern, satisfies_named,
};
use crate::foundation::{Constraint, ConstraintError, Describe, SharedConstraint, Value};

/// Where a builder writes its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    /// A member entry, by position.
    Slot(usize),
    /// The instance-level entry.
    Instance,
}

/// The value currently under consideration for a registered member.
///
/// `S` is the member type read by the accessor and `V` the output of the
/// chain so far, which differs from `S` after a filter such as
/// [`is_not_null`](Self::is_not_null). Every chaining call replaces the
/// member's entry in the owning set, so the set always evaluates the latest
/// chain.
pub struct MemberBuilder<'s, T, S, V> {
    set: &'s mut MemberConstraintSet<T>,
    target: Target,
    member: Member,
    source: Accessor<T, S>,
    chain: SharedConstraint<S, V>,
    prior: Option<SharedEntry<T>>,
}

impl<'s, T: 'static, S: Value, V: Value> MemberBuilder<'s, T, S, V> {
    pub(super) fn new(
        set: &'s mut MemberConstraintSet<T>,
        target: Target,
        member: Member,
        source: Accessor<T, S>,
        chain: SharedConstraint<S, V>,
        prior: Option<SharedEntry<T>>,
    ) -> Self {
        let mut builder = Self {
            set,
            target,
            member,
            source,
            chain,
            prior,
        };
        builder.commit();
        builder
    }

    /// The member failures are reported against.
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// The chain composed so far.
    pub fn chain(&self) -> &SharedConstraint<S, V> {
        &self.chain
    }

    fn commit(&mut self) {
        let entry: SharedEntry<T> = Arc::new(ChainEntry::new(
            self.member.clone(),
            Arc::clone(&self.source),
            Arc::clone(&self.chain),
        ));
        let entry = match &self.prior {
            Some(prior) => Arc::new(SequenceEntry::new(Arc::clone(prior), entry)),
            None => entry,
        };

        match self.target {
            Target::Slot(index) => {
                if let Some(slot) = self.set.slots.get_mut(index) {
                    slot.entry = entry;
                }
            }
            Target::Instance => self.set.instance = Some(entry),
        }
    }

    fn extend<W: Value>(self, chain: SharedConstraint<S, W>) -> MemberBuilder<'s, T, S, W> {
        MemberBuilder::new(self.set, self.target, self.member, self.source, chain, self.prior)
    }

    /// Chains `constraint` after the constraints registered so far.
    pub fn satisfies<C>(self, constraint: C) -> MemberBuilder<'s, T, S, C::Output>
    where
        C: Constraint<Input = V> + 'static,
    {
        trace!(member = %self.member, constraint = %constraint.name(), "chaining constraint");
        let chain: SharedConstraint<S, C::Output> = Arc::new(And::new(self.chain.clone(), constraint));
        self.extend(chain)
    }

    /// Alias of [`satisfies`](Self::satisfies).
    pub fn and<C>(self, constraint: C) -> MemberBuilder<'s, T, S, C::Output>
    where
        C: Constraint<Input = V> + 'static,
    {
        self.satisfies(constraint)
    }

    /// Chains a predicate reported under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidIdentifier`] if `name` is not a
    /// valid identifier.
    pub fn satisfies_fn<F>(
        self,
        name: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Result<Self, ConstraintError>
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Ok(self.satisfies(satisfies_named(name, predicate)?))
    }

    /// Narrows the value to a `U`, failing when it holds another type.
    pub fn is_instance_of<U: Value>(self) -> MemberBuilder<'s, T, S, U>
    where
        V: Narrow<U>,
    {
        self.satisfies(is_instance_of::<V, U>())
    }

    /// Registers constraints on the members of the current value.
    ///
    /// The callback configures a child set whose members are named under
    /// this member, e.g. `Address.City`. Its entries join this set at the
    /// current position and read the nested value through the chain built so
    /// far; when that chain rejects the value, they are skipped. The child's
    /// instance-level constraints only run once all of its members pass.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the callback.
    pub fn and_nested<F>(self, configure: F) -> Result<Self, ConstraintError>
    where
        F: FnOnce(&mut MemberConstraintSet<V>) -> Result<(), ConstraintError>,
    {
        let mut child = MemberConstraintSet::nested(self.member.clone(), self.set.config().clone());
        configure(&mut child)?;
        trace!(member = %self.member, entries = child.len(), "propagating nested constraints");

        let source = Arc::clone(&self.source);
        let chain = Arc::clone(&self.chain);
        let extract: Extractor<T, V> = Arc::new(move |instance: &T| chain.apply(&source(instance)));
        self.set.absorb(child, &extract);
        Ok(self)
    }
}

// ============================================================================
// TYPED SHORTHANDS
// ============================================================================

#[allow(clippy::wrong_self_convention)]
impl<'s, T: 'static, S: Value, V: Comparable> MemberBuilder<'s, T, S, V> {
    /// Requires the value to be greater than `other`.
    pub fn is_greater_than(self, other: V) -> Self {
        self.satisfies(is_greater_than(other))
    }

    /// Requires the value to be greater than or equal to `other`.
    pub fn is_greater_than_or_equal_to(self, other: V) -> Self {
        self.satisfies(is_greater_than_or_equal_to(other))
    }

    /// Requires the value to be smaller than `other`.
    pub fn is_smaller_than(self, other: V) -> Self {
        self.satisfies(is_smaller_than(other))
    }

    /// Requires the value to be smaller than or equal to `other`.
    pub fn is_smaller_than_or_equal_to(self, other: V) -> Self {
        self.satisfies(is_smaller_than_or_equal_to(other))
    }

    /// Requires the value to lie within `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if `lower > upper`.
    pub fn is_in_range(self, lower: V, upper: V) -> Result<Self, ConstraintError> {
        Ok(self.satisfies(is_in_range(Range::new(lower, upper)?)))
    }

    /// Requires the value to lie outside of `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if `lower > upper`.
    pub fn is_not_in_range(self, lower: V, upper: V) -> Result<Self, ConstraintError> {
        Ok(self.satisfies(is_not_in_range(Range::new(lower, upper)?)))
    }
}

#[allow(clippy::wrong_self_convention)]
impl<'s, T: 'static, S: Value, V: Equatable> MemberBuilder<'s, T, S, V> {
    /// Requires the value to equal `other`.
    pub fn is_equal_to(self, other: V) -> Self {
        self.satisfies(is_equal_to(other))
    }

    /// Requires the value to differ from `other`.
    pub fn is_not_equal_to(self, other: V) -> Self {
        self.satisfies(is_not_equal_to(other))
    }
}

#[allow(clippy::wrong_self_convention)]
impl<'s, T: 'static, S: Value, W: Value> MemberBuilder<'s, T, S, Option<W>> {
    /// Requires a value and continues the chain with it.
    pub fn is_not_null(self) -> MemberBuilder<'s, T, S, W> {
        self.satisfies(is_not_null::<W>())
    }

    /// Requires the absence of a value.
    pub fn is_null(self) -> Self {
        self.satisfies(is_null::<W>())
    }
}

#[allow(clippy::wrong_self_convention)]
impl<'s, T: 'static, S: Value, V: TextValue> MemberBuilder<'s, T, S, V> {
    /// Requires null or empty text.
    pub fn is_null_or_empty(self) -> Self {
        self.satisfies(is_null_or_empty::<V>())
    }

    /// Requires text with at least one character.
    pub fn is_not_null_or_empty(self) -> Self {
        self.satisfies(is_not_null_or_empty::<V>())
    }

    /// Requires the text to contain `needle`.
    pub fn contains(self, needle: impl Into<String>) -> Self {
        self.satisfies(contains::<V>(needle))
    }

    /// Requires the text not to contain `needle`.
    pub fn does_not_contain(self, needle: impl Into<String>) -> Self {
        self.satisfies(does_not_contain::<V>(needle))
    }

    /// Requires the text to match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `pattern` does not
    /// compile.
    pub fn matches(self, pattern: &str) -> Result<Self, ConstraintError> {
        Ok(self.satisfies(matches_pattern::<V>(pattern)?))
    }

    /// Requires the text not to match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `pattern` does not
    /// compile.
    pub fn does_not_match(self, pattern: &str) -> Result<Self, ConstraintError> {
        Ok(self.satisfies(does_not_match_pattern::<V>(pattern)?))
    }
}

#[allow(clippy::wrong_self_convention)]
impl<'s, T: 'static, S: Value, V: Collection> MemberBuilder<'s, T, S, V> {
    /// Requires an empty collection.
    pub fn is_empty(self) -> Self {
        self.satisfies(is_empty::<V>())
    }

    /// Requires at least one element.
    pub fn is_not_empty(self) -> Self {
        self.satisfies(is_not_empty::<V>())
    }
}

impl<T, S: Value, V: Value> fmt::Debug for MemberBuilder<'_, T, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberBuilder")
            .field("member", &self.member)
            .field("target", &self.target)
            .field("chain", self.chain.name())
            .field("extends", &self.prior.is_some())
            .finish()
    }
}
