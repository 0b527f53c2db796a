//! Values substituted into error message templates.

use std::borrow::Cow;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::foundation::Identifier;
use crate::member::Member;

// ============================================================================
// ARGUMENT
// ============================================================================

/// A template argument.
///
/// Arguments keep their type until rendering so that numbers, lists and
/// ranges can be formatted by a [`FormatProvider`](super::FormatProvider).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
    /// No value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer.
    Unsigned(u64),
    /// A floating point number.
    Float(f64),
    /// Text rendered as-is.
    Text(Cow<'static, str>),
    /// A member, rendered by its full name.
    Member(Member),
    /// A list, rendered with the list separator.
    List(Vec<Argument>),
    /// An inclusive range.
    Range {
        /// Lower bound.
        lower: Box<Argument>,
        /// Upper bound.
        upper: Box<Argument>,
    },
}

impl Argument {
    /// Text argument.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(text.into())
    }

    /// Text argument holding the `Debug` rendering of `value`.
    pub fn debug<V: fmt::Debug + ?Sized>(value: &V) -> Self {
        Self::Text(Cow::Owned(format!("{value:?}")))
    }

    /// Range argument.
    pub fn range(lower: Self, upper: Self) -> Self {
        Self::Range {
            lower: Box::new(lower),
            upper: Box::new(upper),
        }
    }

    /// Returns the text if this is a text argument.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for [`Argument::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// ============================================================================
// TO ARGUMENT
// ============================================================================

/// Conversion of constraint parameters into template arguments.
pub trait ToArgument {
    /// Converts `self` into an argument.
    fn to_argument(&self) -> Argument;
}

macro_rules! signed_argument {
    ($($ty:ty),* $(,)?) => {
        $(impl ToArgument for $ty {
            fn to_argument(&self) -> Argument {
                Argument::Integer(i64::from(*self))
            }
        })*
    };
}

macro_rules! unsigned_argument {
    ($($ty:ty),* $(,)?) => {
        $(impl ToArgument for $ty {
            fn to_argument(&self) -> Argument {
                Argument::Unsigned(u64::from(*self))
            }
        })*
    };
}

signed_argument!(i8, i16, i32, i64);
unsigned_argument!(u8, u16, u32, u64);

// `isize`/`usize` are at most 64 bits on every supported target.
#[allow(clippy::cast_possible_truncation)]
impl ToArgument for isize {
    fn to_argument(&self) -> Argument {
        Argument::Integer(*self as i64)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl ToArgument for usize {
    fn to_argument(&self) -> Argument {
        Argument::Unsigned(*self as u64)
    }
}

impl ToArgument for f32 {
    fn to_argument(&self) -> Argument {
        Argument::Float(f64::from(*self))
    }
}

impl ToArgument for f64 {
    fn to_argument(&self) -> Argument {
        Argument::Float(*self)
    }
}

impl ToArgument for bool {
    fn to_argument(&self) -> Argument {
        Argument::Bool(*self)
    }
}

impl ToArgument for char {
    fn to_argument(&self) -> Argument {
        Argument::Text(Cow::Owned(self.to_string()))
    }
}

impl ToArgument for str {
    fn to_argument(&self) -> Argument {
        Argument::Text(Cow::Owned(self.to_owned()))
    }
}

impl ToArgument for String {
    fn to_argument(&self) -> Argument {
        Argument::Text(Cow::Owned(self.clone()))
    }
}

impl ToArgument for Cow<'static, str> {
    fn to_argument(&self) -> Argument {
        Argument::Text(self.clone())
    }
}

impl ToArgument for Identifier {
    fn to_argument(&self) -> Argument {
        Argument::Text(Cow::Owned(self.as_str().to_owned()))
    }
}

impl ToArgument for Member {
    fn to_argument(&self) -> Argument {
        Argument::Member(self.clone())
    }
}

impl ToArgument for Argument {
    fn to_argument(&self) -> Argument {
        self.clone()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for &T {
    fn to_argument(&self) -> Argument {
        (**self).to_argument()
    }
}

impl<T: ToArgument> ToArgument for Option<T> {
    fn to_argument(&self) -> Argument {
        self.as_ref().map_or(Argument::Null, ToArgument::to_argument)
    }
}

impl<T: ToArgument> ToArgument for Vec<T> {
    fn to_argument(&self) -> Argument {
        Argument::List(self.iter().map(ToArgument::to_argument).collect())
    }
}

// ============================================================================
// MESSAGE ARGUMENTS
// ============================================================================

/// Named arguments of an error message, in insertion order.
///
/// Most constraints contribute zero to three arguments, so the storage is
/// inline up to four entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageArguments {
    entries: SmallVec<[(Cow<'static, str>, Argument); 4]>,
}

impl MessageArguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing a previous value of the same name.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: Argument) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: Argument) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the argument called `name`.
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if an argument called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.entries.iter().map(|(name, value)| (name.as_ref(), value))
    }

    /// Inserts every argument of `other`, overriding existing names.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }
}

impl Serialize for MessageArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing() {
        let mut arguments = MessageArguments::new();
        arguments.insert("other", 1_i32.to_argument());
        arguments.insert("range", Argument::text("[1, 2]"));
        arguments.insert("other", 2_i32.to_argument());

        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments.get("other"), Some(&Argument::Integer(2)));
        let names: Vec<_> = arguments.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["other", "range"]);
    }

    #[test]
    fn test_to_argument_conversions() {
        assert_eq!(18u8.to_argument(), Argument::Unsigned(18));
        assert_eq!((-3i64).to_argument(), Argument::Integer(-3));
        assert_eq!(u64::MAX.to_argument(), Argument::Unsigned(u64::MAX));
        assert_eq!((-7isize).to_argument(), Argument::Integer(-7));
        assert_eq!(42usize.to_argument(), Argument::Unsigned(42));
        assert_eq!(1.5f32.to_argument(), Argument::Float(1.5));
        assert_eq!("abc".to_argument(), Argument::text("abc"));
        assert_eq!(None::<i32>.to_argument(), Argument::Null);
        assert_eq!(
            vec![1_i32, 2].to_argument(),
            Argument::List(vec![Argument::Integer(1), Argument::Integer(2)])
        );
    }

    #[test]
    fn test_serializes_as_map() {
        let arguments = MessageArguments::new()
            .with("other", 18_u32.to_argument())
            .with("range", Argument::range(1_i32.to_argument(), 5_i32.to_argument()));
        let json = serde_json::to_value(&arguments).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "other": 18, "range": { "lower": 1, "upper": 5 } })
        );
    }
}
