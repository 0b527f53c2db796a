//! The member constraint set: named member chains evaluated against a
//! message.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::builder::{MemberBuilder, Target};
use super::entry::{Accessor, ChainEntry, Extractor, GuardedEntry, NestedEntry, SharedEntry};
use super::Member;
use crate::combinators::identity;
use crate::config::ValidationConfig;
use crate::foundation::{ConstraintError, ConstraintExt, Identifier, SharedConstraint, Value};
use crate::message::{ErrorMessageCollection, ErrorMessageReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotOrigin {
    /// Registered on this set with `verify_that`.
    Direct,
    /// Propagated from a child set.
    Nested,
}

pub(super) struct MemberSlot<T> {
    key: String,
    pub(super) entry: SharedEntry<T>,
    origin: SlotOrigin,
}

impl<T> Clone for MemberSlot<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            entry: Arc::clone(&self.entry),
            origin: self.origin,
        }
    }
}

/// Constraint chains registered against the members of a `T`.
///
/// Members are evaluated in registration order. Entries of nested sets are
/// evaluated at the point their parent member registered them. Chains on
/// the whole instance run last and, when collecting every error, only if
/// no member failed.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let mut set = MemberConstraintSet::<Person>::new();
/// set.verify_that("Age", |p: &Person| p.age)?.is_greater_than(18);
/// set.verify_that("Address", |p: &Person| p.address.clone())?
///     .is_not_null()
///     .and_nested(|address| {
///         address.verify_that("City", |a: &Address| a.city.clone())?.is_not_null();
///         Ok(())
///     })?;
///
/// let errors = set.validate(&person).unwrap_err();
/// assert_eq!(errors.get("Age")[0].to_string(), "Age must be greater than 18");
/// ```
pub struct MemberConstraintSet<T> {
    path: Member,
    pub(super) slots: Vec<MemberSlot<T>>,
    pub(super) instance: Option<SharedEntry<T>>,
    config: ValidationConfig,
}

impl<T: 'static> MemberConstraintSet<T> {
    /// Creates an empty set for a root message of type `T`.
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Creates an empty set evaluated with `config`.
    pub fn with_config(config: ValidationConfig) -> Self {
        Self::nested(Member::root::<T>(), config)
    }

    pub(super) fn nested(path: Member, config: ValidationConfig) -> Self {
        Self {
            path,
            slots: Vec::new(),
            instance: None,
            config,
        }
    }

    /// The evaluation settings.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// The member this set validates, the root member for a top-level set.
    pub fn path(&self) -> &Member {
        &self.path
    }

    /// Full names of the registered members, including propagated nested
    /// members, in evaluation order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.key.as_str())
    }

    /// Number of member entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if neither a member nor the instance has constraints.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.instance.is_none()
    }

    /// Starts or extends the chain of the member `name`, read with
    /// `accessor`.
    ///
    /// Registering a name that is already registered extends its chain: the
    /// new constraints only run once the existing ones pass.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidIdentifier`] if `name` is not a
    /// valid identifier.
    pub fn verify_that<S, F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
    ) -> Result<MemberBuilder<'_, T, S, S>, ConstraintError>
    where
        S: Value,
        F: Fn(&T) -> S + Send + Sync + 'static,
    {
        let member = self.path.child::<S>(Identifier::new(name)?);
        let key = member.full_name();
        let source: Accessor<T, S> = Arc::new(accessor);
        let chain: SharedConstraint<S> = identity::<S>().shared();

        let existing = self
            .slots
            .iter()
            .position(|slot| slot.origin == SlotOrigin::Direct && slot.key == key);
        let (index, prior) = match existing {
            Some(index) => {
                trace!(member = %key, "extending member constraints");
                (index, Some(Arc::clone(&self.slots[index].entry)))
            }
            None => {
                trace!(member = %key, "registering member constraints");
                let entry = ChainEntry::new(member.clone(), Arc::clone(&source), Arc::clone(&chain));
                self.slots.push(MemberSlot {
                    key,
                    entry: Arc::new(entry),
                    origin: SlotOrigin::Direct,
                });
                (self.slots.len() - 1, None)
            }
        };

        Ok(MemberBuilder::new(self, Target::Slot(index), member, source, chain, prior))
    }

    /// Starts or extends the chain on the whole instance.
    ///
    /// Failures are reported under the set's own path, the empty string for
    /// a top-level set.
    pub fn verify_that_instance(&mut self) -> MemberBuilder<'_, T, T, T>
    where
        T: Value,
    {
        let member = self.path.clone();
        let source: Accessor<T, T> = Arc::new(T::clone);
        let chain: SharedConstraint<T> = identity::<T>().shared();
        let prior = self.instance.clone();
        trace!(member = %member, "registering instance constraints");
        MemberBuilder::new(self, Target::Instance, member, source, chain, prior)
    }

    /// Evaluates every entry against `instance` and writes each failure into
    /// `reader`, keyed by the full dotted member name.
    ///
    /// Returns `true` if at least one error message was written.
    pub fn write_error_messages(&self, instance: &T, reader: &mut dyn ErrorMessageReader) -> bool {
        let halt = self.config.mode.halts_on_first_error();
        let mut failures = 0_usize;

        for slot in &self.slots {
            if slot.entry.write_error_message(instance, reader) {
                failures += 1;
                if halt {
                    debug!(subject = %self.path, member = %slot.key, "halted on first error");
                    return true;
                }
            }
        }

        if failures == 0
            && let Some(entry) = &self.instance
            && entry.write_error_message(instance, reader)
        {
            failures += 1;
        }

        debug!(
            subject = %self.path,
            members = self.slots.len(),
            failures,
            mode = ?self.config.mode,
            "evaluated member constraint set"
        );
        failures > 0
    }

    /// Evaluates `instance`, collecting every failure.
    ///
    /// The returned collection is displayed with the configured format.
    ///
    /// # Errors
    ///
    /// Returns the collected error messages if any constraint failed.
    pub fn validate(&self, instance: &T) -> Result<(), ErrorMessageCollection> {
        let mut errors = ErrorMessageCollection::with_format(self.config.format.clone());
        self.write_error_messages(instance, &mut errors);
        errors.into_result(())
    }

    /// Moves the entries of a configured child set into this set, reading
    /// the child value with `extract`.
    pub(super) fn absorb<V: 'static>(&mut self, child: MemberConstraintSet<V>, extract: &Extractor<T, V>) {
        let guards: Vec<SharedEntry<V>> = child.slots.iter().map(|slot| Arc::clone(&slot.entry)).collect();

        for slot in child.slots {
            let entry = NestedEntry::new(Arc::clone(extract), slot.entry);
            self.slots.push(MemberSlot {
                key: slot.key,
                entry: Arc::new(entry),
                origin: SlotOrigin::Nested,
            });
        }

        if let Some(instance) = child.instance {
            let guarded: SharedEntry<V> = Arc::new(GuardedEntry::new(guards, instance));
            let entry = NestedEntry::new(Arc::clone(extract), guarded);
            self.slots.push(MemberSlot {
                key: child.path.full_name(),
                entry: Arc::new(entry),
                origin: SlotOrigin::Nested,
            });
        }
    }
}

impl<T: 'static> Default for MemberConstraintSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemberConstraintSet<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            slots: self.slots.clone(),
            instance: self.instance.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> fmt::Debug for MemberConstraintSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberConstraintSet")
            .field("path", &self.path)
            .field(
                "members",
                &self.slots.iter().map(|slot| slot.key.as_str()).collect::<Vec<_>>(),
            )
            .field("has_instance_constraints", &self.instance.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluationMode;
    use crate::message::ErrorMessage;

    #[derive(Debug, Clone)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_owned(),
            age,
        }
    }

    fn set(mode: EvaluationMode) -> MemberConstraintSet<Person> {
        let mut set = MemberConstraintSet::with_config(ValidationConfig::new().with_mode(mode));
        set.verify_that("Name", |p: &Person| p.name.clone())
            .unwrap()
            .is_not_null_or_empty();
        set.verify_that("Age", |p: &Person| p.age).unwrap().is_greater_than(17);
        set
    }

    #[test]
    fn test_invalid_member_name() {
        let mut set = MemberConstraintSet::<Person>::new();
        let error = set.verify_that("first name", |p: &Person| p.age).err().unwrap();
        assert!(matches!(error, ConstraintError::InvalidIdentifier { .. }));
        assert!(set.is_empty());
    }

    #[test]
    fn test_valid_instance_writes_nothing() {
        let mut reader: Vec<(String, ErrorMessage)> = Vec::new();
        assert!(!set(EvaluationMode::CollectAll).write_error_messages(&person("Ann", 30), &mut reader));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_collect_all_and_halt() {
        let invalid = person("", 3);

        let mut reader: Vec<(String, ErrorMessage)> = Vec::new();
        assert!(set(EvaluationMode::CollectAll).write_error_messages(&invalid, &mut reader));
        let keys: Vec<_> = reader.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["Name", "Age"]);

        let mut reader: Vec<(String, ErrorMessage)> = Vec::new();
        assert!(set(EvaluationMode::HaltOnFirstError).write_error_messages(&invalid, &mut reader));
        assert_eq!(reader.len(), 1);
        assert_eq!(reader[0].0, "Name");
    }

    #[test]
    fn test_member_names_in_registration_order() {
        let set = set(EvaluationMode::CollectAll);
        assert_eq!(set.member_names().collect::<Vec<_>>(), vec!["Name", "Age"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clone_shares_entries() {
        let original = set(EvaluationMode::CollectAll);
        let copy = original.clone();
        assert!(copy.validate(&person("", 30)).is_err());
        assert!(original.validate(&person("Ann", 30)).is_ok());
    }
}
