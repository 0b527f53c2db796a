//! Constraint names and error message templates.

use std::fmt;

use serde::Serialize;

use super::{Identifier, StringTemplate};

/// Bound shared by every value a constraint can inspect or produce.
///
/// Values are cloned into filter outputs and debug-printed into error
/// messages, and constraints are shared across threads.
pub trait Value: Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Value for T where T: Clone + fmt::Debug + Send + Sync + 'static {}

/// The name and error message template carried by every constraint.
///
/// Neither field can be absent: built-in constraints start from a compiled-in
/// default and [`Rename`](super::Rename) swaps in a caller-supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConstraintMetadata {
    name: Identifier,
    error_message: StringTemplate,
}

impl ConstraintMetadata {
    /// Creates metadata from a validated name and template.
    pub fn new(name: Identifier, error_message: StringTemplate) -> Self {
        Self {
            name,
            error_message,
        }
    }

    pub(crate) const fn from_static(name: &'static str, error_message: &'static str) -> Self {
        Self {
            name: Identifier::from_static(name),
            error_message: StringTemplate::from_static(error_message),
        }
    }

    /// The constraint name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// The error message template.
    pub fn error_message(&self) -> &StringTemplate {
        &self.error_message
    }

    /// Returns a copy with a different name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: Identifier) -> Self {
        self.name = name;
        self
    }

    /// Returns a copy with a different template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_message(mut self, error_message: StringTemplate) -> Self {
        self.error_message = error_message;
        self
    }
}
