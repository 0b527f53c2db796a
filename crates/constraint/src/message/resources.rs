//! Default names and English error message templates of the built-in
//! constraints.

use crate::foundation::ConstraintMetadata;

macro_rules! defaults {
    ($($(#[$meta:meta])* $const_name:ident => ($name:literal, $template:literal);)*) => {
        $(
            $(#[$meta])*
            pub const $const_name: ConstraintMetadata = ConstraintMetadata::from_static($name, $template);
        )*

        #[cfg(test)]
        pub(crate) const ALL: &[(&str, &str)] = &[$(($name, $template)),*];
    };
}

defaults! {
    /// Sequential composition.
    AND => ("and", "{member} must satisfy every constraint of the chain");
    /// Alternatives; `{constraints}` lists the alternatives, `{reasons}` their failures.
    OR => ("or", "{member} must satisfy at least one of {constraints} ({reasons})");
    /// Generic negation; `{constraint}` names the negated constraint.
    NOT => ("not", "{member} must not satisfy {constraint}");
    IDENTITY => ("identity", "{member} is always valid");
    SATISFIES => ("satisfies", "{member} does not satisfy the required condition");

    IS_EQUAL_TO => ("is_equal_to", "{member} must be equal to {other}");
    IS_NOT_EQUAL_TO => ("is_not_equal_to", "{member} must not be equal to {other}");
    IS_GREATER_THAN => ("is_greater_than", "{member} must be greater than {other}");
    IS_GREATER_THAN_OR_EQUAL_TO => (
        "is_greater_than_or_equal_to",
        "{member} must be greater than or equal to {other}"
    );
    IS_SMALLER_THAN => ("is_smaller_than", "{member} must be smaller than {other}");
    IS_SMALLER_THAN_OR_EQUAL_TO => (
        "is_smaller_than_or_equal_to",
        "{member} must be smaller than or equal to {other}"
    );
    IS_IN_RANGE => ("is_in_range", "{member} must be within range {range}");
    IS_NOT_IN_RANGE => ("is_not_in_range", "{member} must not be within range {range}");

    IS_NULL => ("is_null", "{member} must be null");
    IS_NOT_NULL => ("is_not_null", "{member} must not be null");
    IS_NULL_OR_EMPTY => ("is_null_or_empty", "{member} must be null or empty");
    IS_NOT_NULL_OR_EMPTY => ("is_not_null_or_empty", "{member} must not be null or empty");
    CONTAINS => ("contains", "{member} must contain '{other}'");
    DOES_NOT_CONTAIN => ("does_not_contain", "{member} must not contain '{other}'");
    MATCHES_PATTERN => ("matches_pattern", "{member} must match pattern '{pattern}'");
    DOES_NOT_MATCH_PATTERN => ("does_not_match_pattern", "{member} must not match pattern '{pattern}'");

    IS_EMPTY => ("is_empty", "{member} must be empty");
    IS_NOT_EMPTY => ("is_not_empty", "{member} must not be empty");

    IS_INSTANCE_OF => ("is_instance_of", "{member} must be an instance of {type}");
    IS_NOT_INSTANCE_OF => ("is_not_instance_of", "{member} must not be an instance of {type}");
}
