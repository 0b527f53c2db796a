//! Culture-aware rendering of template arguments.

use serde::{Deserialize, Serialize};

use super::Argument;

/// Number and list formatting rules used when rendering error messages.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_constraint::message::{Argument, FormatProvider};
///
/// let german = FormatProvider::invariant()
///     .with_decimal_separator(',')
///     .with_group_separator('.');
/// assert_eq!(german.format(&Argument::Float(1234.5)), "1.234,5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatProvider {
    /// Separator between the integer and fractional digits.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits, if any.
    pub group_separator: Option<char>,
    /// Separator between list items.
    pub list_separator: String,
    /// Text rendered for [`Argument::Null`].
    pub null_text: String,
}

impl Default for FormatProvider {
    fn default() -> Self {
        Self::invariant()
    }
}

impl FormatProvider {
    /// Culture-independent formatting: `.` decimals, no grouping, `, ` lists.
    pub fn invariant() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
            list_separator: ", ".to_owned(),
            null_text: "null".to_owned(),
        }
    }

    /// Sets the decimal separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Enables digit grouping with `separator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = Some(separator);
        self
    }

    /// Sets the list separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.list_separator = separator.into();
        self
    }

    /// Sets the text rendered for null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_null_text(mut self, text: impl Into<String>) -> Self {
        self.null_text = text.into();
        self
    }

    /// Renders `argument` as text.
    pub fn format(&self, argument: &Argument) -> String {
        match argument {
            Argument::Null => self.null_text.clone(),
            Argument::Bool(value) => value.to_string(),
            Argument::Integer(value) => {
                let digits = self.group(&value.unsigned_abs().to_string());
                if *value < 0 { format!("-{digits}") } else { digits }
            }
            Argument::Unsigned(value) => self.group(&value.to_string()),
            Argument::Float(value) => self.format_float(*value),
            Argument::Text(text) => text.to_string(),
            Argument::Member(member) => member.to_string(),
            Argument::List(items) => self.join(items.iter().map(|item| self.format(item))),
            Argument::Range { lower, upper } => {
                format!(
                    "[{}{}{}]",
                    self.format(lower),
                    self.list_separator,
                    self.format(upper)
                )
            }
        }
    }

    /// Joins already rendered items with the list separator.
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let mut joined = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                joined.push_str(&self.list_separator);
            }
            joined.push_str(&item);
        }
        joined
    }

    fn format_float(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let rendered = value.abs().to_string();
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rendered.as_str(), None),
        };

        let mut output = String::with_capacity(rendered.len() + 4);
        if value.is_sign_negative() && value != 0.0 {
            output.push('-');
        }
        output.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            output.push(self.decimal_separator);
            output.push_str(fraction);
        }
        output
    }

    fn group(&self, digits: &str) -> String {
        let Some(separator) = self.group_separator else {
            return digits.to_owned();
        };
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}
