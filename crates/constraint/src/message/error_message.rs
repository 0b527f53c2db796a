//! The error message produced by a failed constraint.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{Argument, FormatProvider, MessageArguments};
use crate::foundation::{Identifier, StringTemplate};
use crate::member::Member;

// ============================================================================
// ERROR MESSAGE
// ============================================================================

/// An immutable description of one validation failure.
///
/// Carries the failed constraint's name and template, the member that was
/// checked, the failed value and the constraint's arguments. Rendering
/// substitutes the template placeholders:
///
/// | placeholder   | value                                               |
/// |---------------|-----------------------------------------------------|
/// | `member`      | the member's full name (or `Value`)                 |
/// | `value`       | the failed value                                    |
/// | `constraint`  | the failed constraint's name, unless overridden     |
/// | `reasons`     | the rendered nested failures of an OR composite     |
/// | anything else | the argument of that name, if the constraint set it |
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::prelude::*;
///
/// let error = is_greater_than(18).evaluate(&16).unwrap_err();
/// assert_eq!(error.to_string(), "Value must be greater than 18");
/// assert_eq!(error.argument("other"), Some(&Argument::Integer(18)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    constraint: Identifier,
    template: StringTemplate,
    member: Member,
    value: Argument,
    arguments: MessageArguments,
    nested: Vec<ErrorMessage>,
}

impl ErrorMessage {
    pub(crate) fn new(
        constraint: Identifier,
        template: StringTemplate,
        member: Member,
        value: Argument,
        arguments: MessageArguments,
        nested: Vec<Self>,
    ) -> Self {
        Self {
            constraint,
            template,
            member,
            value,
            arguments,
            nested,
        }
    }

    /// Name of the failed constraint.
    pub fn constraint_name(&self) -> &Identifier {
        &self.constraint
    }

    /// The template this message renders.
    pub fn template(&self) -> &StringTemplate {
        &self.template
    }

    /// The member that failed.
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// The failed value.
    pub fn value(&self) -> &Argument {
        &self.value
    }

    /// Arguments contributed by the failed constraint.
    pub fn arguments(&self) -> &MessageArguments {
        &self.arguments
    }

    /// Returns the argument called `name`.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    /// Failures of the alternatives of an OR composite.
    pub fn nested(&self) -> &[ErrorMessage] {
        &self.nested
    }

    /// Returns a copy reported against `member`, nested failures included.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_member(mut self, member: Member) -> Self {
        self.nested = self
            .nested
            .into_iter()
            .map(|nested| nested.with_member(member.clone()))
            .collect();
        self.member = member;
        self
    }

    /// Returns a copy rendered with a different template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: StringTemplate) -> Self {
        self.template = template;
        self
    }

    /// Renders the message with `format`.
    pub fn render(&self, format: &FormatProvider) -> String {
        self.template.render(|name| self.resolve(name, format))
    }

    fn resolve(&self, name: &str, format: &FormatProvider) -> Option<String> {
        match name {
            "member" => Some(self.member.to_string()),
            "value" => Some(format.format(&self.value)),
            _ => {
                if let Some(argument) = self.arguments.get(name) {
                    return Some(format.format(argument));
                }
                match name {
                    "constraint" => Some(self.constraint.to_string()),
                    "reasons" => Some(format.join(self.nested.iter().map(|n| n.render(format)))),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FormatProvider::invariant()))
    }
}

impl std::error::Error for ErrorMessage {}

impl Serialize for ErrorMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.nested.is_empty() { 5 } else { 6 };
        let mut state = serializer.serialize_struct("ErrorMessage", fields)?;
        state.serialize_field("constraint", &self.constraint)?;
        state.serialize_field("member", &self.member)?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("arguments", &self.arguments)?;
        if !self.nested.is_empty() {
            state.serialize_field("nested", &self.nested)?;
        }
        state.end()
    }
}
