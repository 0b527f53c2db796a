//! Error message templates with named placeholders.
//!
//! A template is plain text with `{name}` placeholders, where `name` is an
//! [`Identifier`]. Literal braces are written `{{` and `}}`.
//!
//! ```text
//! {member} must be greater than {other}.
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::{ConstraintError, Identifier};

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Text copied to the output as-is (escapes already resolved).
    Literal(Cow<'a, str>),
    /// A `{name}` placeholder.
    Placeholder(&'a str),
}

/// A parametrized error message.
///
/// Templates built with [`StringTemplate::new`] are checked up front.
/// Rendering never fails: placeholders without a value are written back
/// verbatim so a missing argument is visible in the output instead of
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StringTemplate(Cow<'static, str>);

impl StringTemplate {
    /// Parses and validates a template.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Result<Self, ConstraintError> {
        let source = source.into();
        if let Err((offset, reason)) = parse(&source) {
            return Err(ConstraintError::InvalidTemplate {
                template: source.into_owned(),
                offset,
                reason,
            });
        }
        Ok(Self(source))
    }

    /// Wraps a compile-time template without checking it.
    pub(crate) const fn from_static(source: &'static str) -> Self {
        Self(Cow::Borrowed(source))
    }

    /// Returns the template source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the parsed segments of the template.
    pub fn parts(&self) -> Result<Vec<TemplatePart<'_>>, ConstraintError> {
        parse(&self.0).map_err(|(offset, reason)| ConstraintError::InvalidTemplate {
            template: self.0.clone().into_owned(),
            offset,
            reason,
        })
    }

    /// Returns the placeholder names in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        parse(&self.0)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|part| match part {
                        TemplatePart::Placeholder(name) => Some(name),
                        TemplatePart::Literal(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns `true` if the template contains a `{name}` placeholder.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders().contains(&name)
    }

    /// Substitutes every placeholder with the value returned by `resolve`.
    ///
    /// Unresolved placeholders are kept as `{name}`. A template that does not
    /// parse is returned unchanged.
    pub fn render<F>(&self, mut resolve: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Ok(parts) = parse(&self.0) else {
            return self.0.to_string();
        };

        let mut output = String::with_capacity(self.0.len() + 16);
        for part in parts {
            match part {
                TemplatePart::Literal(text) => output.push_str(&text),
                TemplatePart::Placeholder(name) => match resolve(name) {
                    Some(value) => output.push_str(&value),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                },
            }
        }
        output
    }
}

impl fmt::Display for StringTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StringTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&'static str> for StringTemplate {
    type Error = ConstraintError;

    fn try_from(value: &'static str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for StringTemplate {
    type Error = ConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// PARSER
// ============================================================================

fn parse(source: &str) -> Result<Vec<TemplatePart<'_>>, (usize, &'static str)> {
    let mut parts = Vec::new();
    // Literal text is borrowed from `source` until an escape forces a copy.
    let mut literal = String::new();
    let mut literal_start = 0;
    let mut borrowed = true;
    let bytes = source.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            brace @ (b'{' | b'}') if bytes.get(i + 1) == Some(&brace) => {
                if borrowed {
                    literal.push_str(&source[literal_start..i]);
                    borrowed = false;
                }
                literal.push(char::from(brace));
                i += 2;
            }
            b'{' => {
                let Some(length) = source[i + 1..].find('}') else {
                    return Err((i, "unclosed placeholder"));
                };
                let name = &source[i + 1..i + 1 + length];
                if !Identifier::is_valid(name) {
                    return Err((i, "placeholder name is not a valid identifier"));
                }
                flush(source, &mut parts, &mut literal, borrowed, literal_start, i);
                parts.push(TemplatePart::Placeholder(name));
                i += length + 2;
                literal_start = i;
                borrowed = true;
            }
            b'}' => return Err((i, "unmatched closing brace")),
            _ if borrowed => i += 1,
            _ => {
                let width = source[i..].chars().next().map_or(1, char::len_utf8);
                literal.push_str(&source[i..i + width]);
                i += width;
            }
        }
    }
    flush(source, &mut parts, &mut literal, borrowed, literal_start, source.len());
    Ok(parts)
}

fn flush<'a>(
    source: &'a str,
    parts: &mut Vec<TemplatePart<'a>>,
    literal: &mut String,
    borrowed: bool,
    start: usize,
    end: usize,
) {
    if borrowed {
        if start < end {
            parts.push(TemplatePart::Literal(Cow::Borrowed(&source[start..end])));
        }
    } else if !literal.is_empty() {
        parts.push(TemplatePart::Literal(Cow::Owned(std::mem::take(literal))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str) -> Option<String> {
        match name {
            "member" => Some("Age".into()),
            "other" => Some("18".into()),
            _ => None,
        }
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = StringTemplate::new("{member} must be greater than {other}.").unwrap();
        assert_eq!(template.render(resolve), "Age must be greater than 18.");
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let template = StringTemplate::new("{member} vs {missing}").unwrap();
        assert_eq!(template.render(resolve), "Age vs {missing}");
    }

    #[test]
    fn test_escaped_braces() {
        let template = StringTemplate::new("{{literal}} {member} }}").unwrap();
        assert_eq!(template.render(resolve), "{literal} Age }");
        assert_eq!(template.placeholders(), vec!["member"]);
    }

    #[test]
    fn test_escapes_preserve_multibyte_text() {
        let template = StringTemplate::new("{{ä}} {member} ö").unwrap();
        assert_eq!(template.render(resolve), "{ä} Age ö");
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = StringTemplate::new("{other} {member} {other}").unwrap();
        assert_eq!(template.placeholders(), vec!["other", "member", "other"]);
        assert!(template.has_placeholder("member"));
        assert!(!template.has_placeholder("range"));
    }

    #[test]
    fn test_plain_text_has_single_literal() {
        let template = StringTemplate::new("no placeholders").unwrap();
        assert_eq!(
            template.parts().unwrap(),
            vec![TemplatePart::Literal(Cow::Borrowed("no placeholders"))]
        );
    }

    #[test]
    fn test_rejects_malformed_templates() {
        let cases = [
            ("{member", 0, "unclosed placeholder"),
            ("a } b", 2, "unmatched closing brace"),
            ("{1st}", 0, "placeholder name is not a valid identifier"),
            ("{}", 0, "placeholder name is not a valid identifier"),
        ];
        for (source, expected_offset, expected_reason) in cases {
            match StringTemplate::new(source) {
                Err(ConstraintError::InvalidTemplate { offset, reason, .. }) => {
                    assert_eq!(offset, expected_offset, "{source}");
                    assert_eq!(reason, expected_reason, "{source}");
                }
                other => panic!("expected InvalidTemplate for {source:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_render_of_unparsed_static_template_is_verbatim() {
        let template = StringTemplate::from_static("broken {");
        assert_eq!(template.render(resolve), "broken {");
    }
}
