//! Contract errors raised while building constraint chains.
//!
//! These are programming errors: a malformed identifier, an unparsable
//! template, an inverted range. They are reported from constructors and
//! registration calls and never from evaluation. A value that fails a
//! constraint is not an error in this sense; it produces an
//! [`ErrorMessage`](crate::message::ErrorMessage) instead.

// ============================================================================
// CONSTRAINT ERROR
// ============================================================================

/// Error returned when a constraint, template or member registration is
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// A member or constraint name is not a valid identifier.
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An error message template could not be parsed.
    #[error("invalid template '{template}' at offset {offset}: {reason}")]
    InvalidTemplate {
        /// The rejected template source.
        template: String,
        /// Byte offset of the offending character.
        offset: usize,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A range whose lower bound is greater than its upper bound.
    #[error("invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange {
        /// Debug rendering of the lower bound.
        lower: String,
        /// Debug rendering of the upper bound.
        upper: String,
    },

    /// A regular expression that failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A composite was built from an empty list of constraints.
    #[error("'{constraint}' requires at least one constraint")]
    EmptyComposite {
        /// Name of the composite.
        constraint: &'static str,
    },

    /// The operation is not defined for this constraint.
    #[error("constraint '{constraint}' does not support {operation}")]
    Unsupported {
        /// Name of the constraint.
        constraint: String,
        /// The unsupported operation.
        operation: &'static str,
    },

    /// A configuration document could not be loaded.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Deserializer diagnostic.
        reason: String,
    },
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl ConstraintError {
    /// Creates an [`Unsupported`](Self::Unsupported) error for `operation`
    /// on the constraint called `constraint`.
    pub fn unsupported(constraint: impl Into<String>, operation: &'static str) -> Self {
        Self::Unsupported {
            constraint: constraint.into(),
            operation,
        }
    }

    /// Creates an [`InvalidRange`](Self::InvalidRange) error from the two
    /// offending bounds.
    pub fn invalid_range<T: std::fmt::Debug>(lower: &T, upper: &T) -> Self {
        Self::InvalidRange {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
        }
    }

    /// Returns `true` if this error reports an unsupported operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let error = ConstraintError::unsupported("and", "inversion");
        assert!(error.is_unsupported());
        assert_eq!(error.to_string(), "constraint 'and' does not support inversion");
    }

    #[test]
    fn test_invalid_range_display() {
        let error = ConstraintError::invalid_range(&10, &1);
        assert_eq!(
            error.to_string(),
            "invalid range: lower bound 10 is greater than upper bound 1"
        );
        assert!(!error.is_unsupported());
    }

    #[test]
    fn test_invalid_template_display() {
        let error = ConstraintError::InvalidTemplate {
            template: "{member".into(),
            offset: 0,
            reason: "unclosed placeholder",
        };
        assert_eq!(
            error.to_string(),
            "invalid template '{member' at offset 0: unclosed placeholder"
        );
    }
}
