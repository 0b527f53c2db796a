//! Text constraints
//!
//! These constraints read their subject through [`TextValue`], so the same
//! constraint applies to owned strings, static strings and their optional
//! forms. A missing text is treated as null: it is neither empty-but-present
//! nor able to contain or match anything.

use std::marker::PhantomData;
use std::sync::Arc;

use regex::Regex;

use crate::foundation::{
    Constraint, ConstraintError, ConstraintMetadata, Describe, Rename, SharedConstraint, Value,
};
use crate::message::{Argument, MessageArguments, resources};

// ============================================================================
// TEXT VALUE
// ============================================================================

/// Values that may hold text.
pub trait TextValue: Value {
    /// Returns the text, or `None` when the value is null.
    fn as_text(&self) -> Option<&str>;
}

impl TextValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for &'static str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl TextValue for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl TextValue for Option<&'static str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

// ============================================================================
// NULL OR EMPTY
// ============================================================================

crate::constraint! {
    /// Accepts null or empty text.
    pub IsNullOrEmpty<S: TextValue> for S;
    metadata: resources::IS_NULL_OR_EMPTY;
    rule(input) { input.as_text().is_none_or(str::is_empty) }
    invert(self) { IsNotNullOrEmpty::<S>::new() }
    fn is_null_or_empty();
}

crate::constraint! {
    /// Accepts text with at least one character.
    pub IsNotNullOrEmpty<S: TextValue> for S;
    metadata: resources::IS_NOT_NULL_OR_EMPTY;
    rule(input) { input.as_text().is_some_and(|text| !text.is_empty()) }
    invert(self) { IsNullOrEmpty::<S>::new() }
    fn is_not_null_or_empty();
}

// ============================================================================
// CONTAINS
// ============================================================================

crate::constraint! {
    /// Accepts text containing a substring.
    pub Contains<S: TextValue> { needle: String } for S;
    metadata: resources::CONTAINS;
    rule(self, input) { input.as_text().is_some_and(|text| text.contains(self.needle.as_str())) }
    arguments(self, args) { args.insert("other", Argument::text(self.needle.clone())); }
    invert(self) { DoesNotContain::<S>::new(self.needle.clone()) }
    new(needle: impl Into<String>) { needle: needle.into() }
    fn contains(needle: impl Into<String>);
}

crate::constraint! {
    /// Accepts text not containing a substring, including null.
    pub DoesNotContain<S: TextValue> { needle: String } for S;
    metadata: resources::DOES_NOT_CONTAIN;
    rule(self, input) { !input.as_text().is_some_and(|text| text.contains(self.needle.as_str())) }
    arguments(self, args) { args.insert("other", Argument::text(self.needle.clone())); }
    invert(self) { Contains::<S>::new(self.needle.clone()) }
    new(needle: impl Into<String>) { needle: needle.into() }
    fn does_not_contain(needle: impl Into<String>);
}

// ============================================================================
// PATTERNS
// ============================================================================

fn compile(pattern: &str) -> Result<Regex, ConstraintError> {
    Regex::new(pattern).map_err(|e| ConstraintError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })
}

/// Accepts text matching a regular expression.
///
/// The pattern is unanchored; use `^...$` to match the whole text.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let zip = matches_pattern::<String>(r"^\d{5}$")?;
/// assert!(zip.is_satisfied_by(&"12345".to_owned()));
/// ```
#[derive(Debug, Clone)]
pub struct MatchesPattern<S> {
    regex: Regex,
    metadata: ConstraintMetadata,
    _input: PhantomData<fn() -> S>,
}

/// Accepts text not matching a regular expression, including null.
#[derive(Debug, Clone)]
pub struct DoesNotMatchPattern<S> {
    regex: Regex,
    metadata: ConstraintMetadata,
    _input: PhantomData<fn() -> S>,
}

impl<S> MatchesPattern<S> {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `pattern` is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConstraintError> {
        compile(pattern).map(Self::from_regex)
    }

    /// Wraps an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            metadata: resources::MATCHES_PATTERN,
            _input: PhantomData,
        }
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<S> DoesNotMatchPattern<S> {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `pattern` is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConstraintError> {
        compile(pattern).map(Self::from_regex)
    }

    /// Wraps an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            metadata: resources::DOES_NOT_MATCH_PATTERN,
            _input: PhantomData,
        }
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<S> Describe for MatchesPattern<S> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        arguments.insert("pattern", Argument::text(self.regex.as_str().to_owned()));
    }
}

impl<S> Describe for DoesNotMatchPattern<S> {
    fn metadata(&self) -> &ConstraintMetadata {
        &self.metadata
    }

    fn write_arguments(&self, arguments: &mut MessageArguments) {
        arguments.insert("pattern", Argument::text(self.regex.as_str().to_owned()));
    }
}

impl<S: TextValue> Constraint for MatchesPattern<S> {
    type Input = S;
    type Output = S;

    fn apply(&self, value: &S) -> Option<S> {
        value
            .as_text()
            .is_some_and(|text| self.regex.is_match(text))
            .then(|| value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<S>, ConstraintError> {
        Ok(Arc::new(DoesNotMatchPattern::<S>::from_regex(self.regex.clone())))
    }
}

impl<S: TextValue> Constraint for DoesNotMatchPattern<S> {
    type Input = S;
    type Output = S;

    fn apply(&self, value: &S) -> Option<S> {
        (!value.as_text().is_some_and(|text| self.regex.is_match(text))).then(|| value.clone())
    }

    fn invert(&self) -> Result<SharedConstraint<S>, ConstraintError> {
        Ok(Arc::new(MatchesPattern::<S>::from_regex(self.regex.clone())))
    }
}

impl<S> Rename for MatchesPattern<S> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            regex: self.regex.clone(),
            metadata,
            _input: PhantomData,
        }
    }
}

impl<S> Rename for DoesNotMatchPattern<S> {
    fn with_metadata(&self, metadata: ConstraintMetadata) -> Self {
        Self {
            regex: self.regex.clone(),
            metadata,
            _input: PhantomData,
        }
    }
}

/// Creates a constraint accepting text that matches `pattern`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidPattern`] if `pattern` does not compile.
pub fn matches_pattern<S: TextValue>(pattern: &str) -> Result<MatchesPattern<S>, ConstraintError> {
    MatchesPattern::new(pattern)
}

/// Creates a constraint accepting text that does not match `pattern`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidPattern`] if `pattern` does not compile.
pub fn does_not_match_pattern<S: TextValue>(
    pattern: &str,
) -> Result<DoesNotMatchPattern<S>, ConstraintError> {
    DoesNotMatchPattern::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
