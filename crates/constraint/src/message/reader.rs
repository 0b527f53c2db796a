//! Collectors for the error messages written by a constraint set.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::{ErrorMessage, FormatProvider};

// ============================================================================
// READER TRAIT
// ============================================================================

/// Receives the error messages produced while validating a message.
///
/// `key` is the full dotted name of the failed member, or the path of the
/// set (empty at the root) for instance-level failures.
pub trait ErrorMessageReader {
    /// Records `message` under `key`.
    fn add(&mut self, key: &str, message: ErrorMessage);
}

impl ErrorMessageReader for Vec<(String, ErrorMessage)> {
    fn add(&mut self, key: &str, message: ErrorMessage) {
        self.push((key.to_owned(), message));
    }
}

/// A reader that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardReader;

impl ErrorMessageReader for DiscardReader {
    fn add(&mut self, _key: &str, _message: ErrorMessage) {}
}

// ============================================================================
// ERROR MESSAGE COLLECTION
// ============================================================================

/// Error messages grouped by member, in the order they were reported.
///
/// The collection carries the [`FormatProvider`] its messages are displayed
/// with. A constraint set's `validate` hands back a collection carrying the
/// set's configured format.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let mut errors = ErrorMessageCollection::new();
/// set.write_error_messages(&person, &mut errors);
/// for message in errors.get("Age") {
///     println!("{message}");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorMessageCollection {
    messages: IndexMap<String, Vec<ErrorMessage>>,
    #[serde(skip)]
    format: FormatProvider,
}

impl ErrorMessageCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection displayed with `format`.
    pub fn with_format(format: FormatProvider) -> Self {
        Self {
            messages: IndexMap::new(),
            format,
        }
    }

    /// The formatting rules used by `Display` and [`rendered`](Self::rendered).
    pub fn format(&self) -> &FormatProvider {
        &self.format
    }

    /// Total number of messages.
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Returns `true` if no message was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Messages recorded under `key`.
    pub fn get(&self, key: &str) -> &[ErrorMessage] {
        self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if at least one message was recorded under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Keys with at least one message, in reporting order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterates over `(key, messages)` in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorMessage])> {
        self.messages
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Moves every message of `other` into this collection, keeping this
    /// collection's format.
    pub fn merge(&mut self, other: Self) {
        for (key, messages) in other.messages {
            self.messages.entry(key).or_default().extend(messages);
        }
    }

    /// Renders every message with `format`.
    pub fn render(&self, format: &FormatProvider) -> IndexMap<String, Vec<String>> {
        self.messages
            .iter()
            .map(|(key, messages)| {
                let rendered = messages.iter().map(|m| m.render(format)).collect();
                (key.clone(), rendered)
            })
            .collect()
    }

    /// Renders every message with the collection's own format.
    pub fn rendered(&self) -> IndexMap<String, Vec<String>> {
        self.render(&self.format)
    }

    /// Converts to a Result.
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl ErrorMessageReader for ErrorMessageCollection {
    fn add(&mut self, key: &str, message: ErrorMessage) {
        match self.messages.get_mut(key) {
            Some(messages) => messages.push(message),
            None => {
                self.messages.insert(key.to_owned(), vec![message]);
            }
        }
    }
}

impl fmt::Display for ErrorMessageCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (key, messages) in &self.messages {
            for message in messages.iter().map(|m| m.render(&self.format)) {
                if key.is_empty() {
                    writeln!(f, "  - {message}")?;
                } else {
                    writeln!(f, "  - {key}: {message}")?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMessageCollection {}
