//! Assembly of error messages from failed constraints.

use std::fmt;

use super::{Argument, ErrorMessage, MessageArguments};
use crate::foundation::{ConstraintNode, ConstraintVisitor, Describe, walk};
use crate::member::Member;

/// Builds the [`ErrorMessage`] for a constraint that rejected a value.
///
/// The message starts out reported against the synthetic `Value` member typed
/// as the failed value; member constraint sets replace it with the registered
/// member. Arguments are collected from the constraint itself and, for OR
/// composites, a `constraints` list naming every leaf alternative.
pub struct ErrorMessageBuilder<'a> {
    constraint: &'a dyn Describe,
    member: Member,
    value: Argument,
    arguments: MessageArguments,
    nested: Vec<ErrorMessage>,
}

impl<'a> ErrorMessageBuilder<'a> {
    /// Starts a message for `constraint` rejecting `value`.
    pub fn new<V: fmt::Debug + ?Sized>(constraint: &'a dyn Describe, value: &V) -> Self {
        Self {
            constraint,
            member: Member::value::<V>(),
            value: Argument::debug(value),
            arguments: MessageArguments::new(),
            nested: Vec::new(),
        }
    }

    /// Reports the failure against `member`.
    #[must_use = "builder methods must be chained or built"]
    pub fn member(mut self, member: Member) -> Self {
        self.member = member;
        self
    }

    /// Replaces the recorded failed value.
    #[must_use = "builder methods must be chained or built"]
    pub fn value(mut self, value: Argument) -> Self {
        self.value = value;
        self
    }

    /// Adds an argument, overriding one of the same name written by the
    /// constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn argument(mut self, name: &'static str, value: Argument) -> Self {
        self.arguments.insert(name, value);
        self
    }

    /// Attaches the failures of child constraints.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested(mut self, nested: Vec<ErrorMessage>) -> Self {
        self.nested = nested;
        self
    }

    /// Finishes the message.
    pub fn build(self) -> ErrorMessage {
        let mut arguments = MessageArguments::new();
        self.constraint.write_arguments(&mut arguments);

        let is_or = matches!(self.constraint.node(), ConstraintNode::Or(_));
        if is_or && !arguments.contains("constraints") {
            let mut leaves = LeafNames::default();
            walk(&mut leaves, self.constraint);
            arguments.insert("constraints", Argument::List(leaves.0));
        }
        arguments.merge(self.arguments);

        ErrorMessage::new(
            self.constraint.name().clone(),
            self.constraint.error_message().clone(),
            self.member,
            self.value,
            arguments,
            self.nested,
        )
    }
}

/// Collects the names of the leaves of a constraint tree. A negation counts
/// as a leaf of its own so the list reads `not`, not the negated name.
#[derive(Default)]
struct LeafNames(Vec<Argument>);

impl ConstraintVisitor for LeafNames {
    fn visit_leaf(&mut self, constraint: &dyn Describe) {
        self.0.push(Argument::text(constraint.name().to_string()));
    }

    fn visit_not(&mut self, constraint: &dyn Describe, _inner: &dyn Describe) {
        self.visit_leaf(constraint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{is_greater_than, is_smaller_than, satisfies};
    use crate::foundation::{Constraint, ConstraintExt};

    #[test]
    fn test_leaf_defaults_to_value_member() {
        let constraint = is_greater_than(18);
        let error = ErrorMessageBuilder::new(&constraint, &16).build();

        assert_eq!(error.member().full_name(), "Value");
        assert_eq!(error.member().type_name(), "i32");
        assert_eq!(error.value(), &Argument::text("16"));
        assert_eq!(error.argument("other"), Some(&Argument::Integer(18)));
        assert_eq!(error.to_string(), "Value must be greater than 18");
    }

    #[test]
    fn test_or_collects_leaf_names() {
        let constraint = is_smaller_than(0)
            .or(is_greater_than(10).and(satisfies(|v: &i32| v % 2 == 0)))
            .or(is_greater_than(-100).not());
        let error = constraint.evaluate(&5).unwrap_err();

        assert_eq!(
            error.argument("constraints"),
            Some(&Argument::List(vec![
                Argument::text("is_smaller_than"),
                Argument::text("is_greater_than"),
                Argument::text("satisfies"),
                Argument::text("not"),
            ]))
        );
        assert_eq!(error.nested().len(), 3);
    }

    #[test]
    fn test_explicit_argument_overrides_constraint_argument() {
        let constraint = is_greater_than(18);
        let error = ErrorMessageBuilder::new(&constraint, &16)
            .argument("other", Argument::text("eighteen"))
            .build();
        assert_eq!(error.to_string(), "Value must be greater than eighteen");
    }
}
