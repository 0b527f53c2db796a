//! Validated name tokens.
//!
//! Constraint names, member names and template placeholders are all
//! identifiers: a letter or underscore followed by letters, digits or
//! underscores.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::Serialize;

use super::ConstraintError;

/// A validated identifier.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::foundation::Identifier;
///
/// let name = Identifier::new("Age")?;
/// assert_eq!(name.as_str(), "Age");
/// assert!(Identifier::new("1st").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(Cow<'static, str>);

impl Identifier {
    /// Creates an identifier, rejecting names that are empty or contain
    /// characters outside `[A-Za-z0-9_]` (or start with a digit).
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, ConstraintError> {
        let name = name.into();
        match Self::check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(ConstraintError::InvalidIdentifier {
                name: name.into_owned(),
                reason,
            }),
        }
    }

    /// Wraps a compile-time name without checking it.
    ///
    /// Only used for the built-in constraint names, which are covered by
    /// tests.
    pub(crate) const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns `true` if `name` would be accepted by [`Identifier::new`].
    pub fn is_valid(name: &str) -> bool {
        Self::check(name).is_ok()
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(name: &str) -> Result<(), &'static str> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err("identifier is empty");
        };
        if !(first.is_alphabetic() || first == '_') {
            return Err("identifier must start with a letter or underscore");
        }
        if chars.all(|c| c.is_alphanumeric() || c == '_') {
            Ok(())
        } else {
            Err("identifier may only contain letters, digits and underscores")
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&'static str> for Identifier {
    type Error = ConstraintError;

    fn try_from(value: &'static str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["Age", "_private", "address_line_2", "x", "Größe"] {
            assert!(Identifier::is_valid(name), "{name} should be valid");
            assert_eq!(Identifier::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "1st", "has space", "dotted.path", "brace}"] {
            let error = Identifier::new(name).unwrap_err();
            assert!(matches!(error, ConstraintError::InvalidIdentifier { .. }));
        }
    }

    #[test]
    fn test_owned_and_borrowed_compare_equal() {
        let owned = Identifier::try_from(String::from("City")).unwrap();
        let borrowed = Identifier::from_static("City");
        assert_eq!(owned, borrowed);
        assert_eq!(owned, "City");
    }

    #[test]
    fn test_serializes_as_string() {
        let name = Identifier::new("Age").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Age\"");
    }
}
