//! Evaluation settings for member constraint sets.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_constraint::config::{EvaluationMode, ValidationConfig};
//!
//! let config = ValidationConfig::from_json_str(r#"{ "mode": "halt_on_first_error" }"#)?;
//! assert_eq!(config.mode, EvaluationMode::HaltOnFirstError);
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::ConstraintError;
use crate::message::FormatProvider;

/// How a member constraint set reacts to the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Evaluate every member; instance-level constraints only run when no
    /// member failed.
    #[default]
    CollectAll,
    /// Stop at the first failing member or instance constraint.
    HaltOnFirstError,
}

impl EvaluationMode {
    /// Returns `true` for [`EvaluationMode::HaltOnFirstError`].
    pub fn halts_on_first_error(self) -> bool {
        matches!(self, Self::HaltOnFirstError)
    }
}

/// Settings shared by a constraint set and every child set nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Evaluation mode.
    pub mode: EvaluationMode,
    /// Formatting rules for rendered messages.
    pub format: FormatProvider,
}

impl ValidationConfig {
    /// Collect-all evaluation with invariant formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Halt-on-first-error evaluation with invariant formatting.
    pub fn fail_fast() -> Self {
        Self::default().with_mode(EvaluationMode::HaltOnFirstError)
    }

    /// Sets the evaluation mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the formatting rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: FormatProvider) -> Self {
        self.format = format;
        self
    }

    /// Loads a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConstraintError> {
        serde_json::from_str(json).map_err(|e| ConstraintError::InvalidConfiguration {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::new();
        assert_eq!(config.mode, EvaluationMode::CollectAll);
        assert_eq!(config.format, FormatProvider::invariant());
        assert!(ValidationConfig::fail_fast().mode.halts_on_first_error());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ValidationConfig::from_json_str(
            r#"{ "mode": "halt_on_first_error", "format": { "decimal_separator": "," } }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ValidationConfig::fail_fast()
                .with_format(FormatProvider::invariant().with_decimal_separator(','))
        );
        assert_eq!(ValidationConfig::from_json_str("{}").unwrap(), ValidationConfig::new());
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        let error = ValidationConfig::from_json_str(r#"{ "mode": "sometimes" }"#).unwrap_err();
        assert!(matches!(error, ConstraintError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_serializes_mode_in_snake_case() {
        let json = serde_json::to_value(ValidationConfig::fail_fast()).unwrap();
        assert_eq!(json["mode"], "halt_on_first_error");
    }
}
