//! Dotted member paths.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::foundation::Identifier;

/// Name of the synthetic member used when a constraint fails outside of a
/// member registration.
pub const DEFAULT_MEMBER_NAME: &str = "Value";

/// A named, typed access path from a root message to a nested value,
/// e.g. `Order.Customer.Name`.
///
/// The root member has an empty path and displays as its type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    path: Vec<Identifier>,
    type_name: Cow<'static, str>,
}

impl Member {
    /// The root of a message of type `T`.
    pub fn root<T: ?Sized>() -> Self {
        Self {
            path: Vec::new(),
            type_name: short_type_name(type_name::<T>()).into(),
        }
    }

    /// The synthetic `Value` member typed as `T`.
    pub fn value<T: ?Sized>() -> Self {
        Self {
            path: vec![Identifier::from_static(DEFAULT_MEMBER_NAME)],
            type_name: short_type_name(type_name::<T>()).into(),
        }
    }

    /// A member of type `T` called `name` under this one.
    #[must_use]
    pub fn child<T: ?Sized>(&self, name: Identifier) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(name);
        Self {
            path,
            type_name: short_type_name(type_name::<T>()).into(),
        }
    }

    /// The member's own name, `None` for the root.
    pub fn name(&self) -> Option<&Identifier> {
        self.path.last()
    }

    /// The path components from the root.
    pub fn path(&self) -> &[Identifier] {
        &self.path
    }

    /// Number of components in the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` for the root member.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Short name of the member's type, without module paths.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Dotted path from the root; empty for the root itself.
    pub fn full_name(&self) -> String {
        let mut full = String::new();
        for (i, part) in self.path.iter().enumerate() {
            if i > 0 {
                full.push('.');
            }
            full.push_str(part.as_str());
        }
        full
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(&self.type_name)
        } else {
            f.write_str(&self.full_name())
        }
    }
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Strips module paths from a `std::any::type_name` string:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        push_last_segment(&mut short, &full[segment_start..i]);
        short.push(c);
        segment_start = i + c.len_utf8();
    }
    push_last_segment(&mut short, &full[segment_start..]);
    short
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}
