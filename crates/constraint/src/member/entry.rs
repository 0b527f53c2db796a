//! Evaluation entries registered in a member constraint set.
//!
//! Every registered member, extended member and propagated child member is an
//! entry. An entry writes at most one error message per evaluation, since
//! the chains it runs stop at their first failing link.

use std::sync::Arc;

use tracing::trace;

use super::Member;
use crate::foundation::{Constraint, SharedConstraint, Value};
use crate::message::{DiscardReader, ErrorMessageReader};

/// Reads a member value from its parent.
pub(crate) type Accessor<T, S> = Arc<dyn Fn(&T) -> S + Send + Sync>;

/// Reads a nested value through the parent member's chain; `None` when the
/// chain rejects the parent value.
pub(crate) type Extractor<T, V> = Arc<dyn Fn(&T) -> Option<V> + Send + Sync>;

/// One evaluation step of a member constraint set over a `T`.
pub(crate) trait MemberEntry<T>: Send + Sync {
    /// Evaluates the entry against `instance`, writing a failure into
    /// `reader`. Returns `true` if an error message was written.
    fn write_error_message(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool;
}

pub(crate) type SharedEntry<T> = Arc<dyn MemberEntry<T>>;

// ============================================================================
// CHAIN
// ============================================================================

/// Runs a composed chain on the value read by an accessor.
pub(crate) struct ChainEntry<T, S, V> {
    member: Member,
    source: Accessor<T, S>,
    chain: SharedConstraint<S, V>,
}

impl<T, S, V> ChainEntry<T, S, V> {
    pub(crate) fn new(member: Member, source: Accessor<T, S>, chain: SharedConstraint<S, V>) -> Self {
        Self {
            member,
            source,
            chain,
        }
    }
}

impl<T, S: Value, V: Value> MemberEntry<T> for ChainEntry<T, S, V> {
    fn write_error_message(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool {
        let value = (self.source)(instance);
        match self.chain.evaluate(&value) {
            Ok(_) => false,
            Err(message) => {
                let key = self.member.full_name();
                trace!(
                    member = %key,
                    constraint = %message.constraint_name(),
                    "member constraint failed"
                );
                reader.add(&key, message.with_member(self.member.clone()));
                true
            }
        }
    }
}

// ============================================================================
// SEQUENCE
// ============================================================================

/// A re-registered member: the later chain only runs once the earlier one
/// passed.
pub(crate) struct SequenceEntry<T> {
    first: SharedEntry<T>,
    second: SharedEntry<T>,
}

impl<T> SequenceEntry<T> {
    pub(crate) fn new(first: SharedEntry<T>, second: SharedEntry<T>) -> Self {
        Self { first, second }
    }
}

impl<T> MemberEntry<T> for SequenceEntry<T> {
    fn write_error_message(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool {
        self.first.write_error_message(instance, reader)
            || self.second.write_error_message(instance, reader)
    }
}

// ============================================================================
// NESTED
// ============================================================================

/// A child set entry evaluated on the value extracted from the parent.
///
/// Skipped when the parent chain rejects the value; that failure is
/// reported by the parent member itself.
pub(crate) struct NestedEntry<T, V> {
    extract: Extractor<T, V>,
    inner: SharedEntry<V>,
}

impl<T, V> NestedEntry<T, V> {
    pub(crate) fn new(extract: Extractor<T, V>, inner: SharedEntry<V>) -> Self {
        Self { extract, inner }
    }
}

impl<T, V> MemberEntry<T> for NestedEntry<T, V> {
    fn write_error_message(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool {
        match (self.extract)(instance) {
            Some(value) => self.inner.write_error_message(&value, reader),
            None => false,
        }
    }
}

// ============================================================================
// GUARDED
// ============================================================================

/// An instance-level entry of a child set, only evaluated when every member
/// entry of that child set passes.
pub(crate) struct GuardedEntry<T> {
    guards: Vec<SharedEntry<T>>,
    entry: SharedEntry<T>,
}

impl<T> GuardedEntry<T> {
    pub(crate) fn new(guards: Vec<SharedEntry<T>>, entry: SharedEntry<T>) -> Self {
        Self { guards, entry }
    }
}

impl<T> MemberEntry<T> for GuardedEntry<T> {
    fn write_error_message(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool {
        let blocked = self
            .guards
            .iter()
            .any(|guard| guard.write_error_message(instance, &mut DiscardReader));
        !blocked && self.entry.write_error_message(instance, reader)
    }
}
