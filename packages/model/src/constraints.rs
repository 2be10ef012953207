//! Native constraint validation, modelled on the browser's `ValidityState`.
//!
//! An input declares [`Constraints`] (the `required`, `minlength`, `maxlength`,
//! `type` and `pattern` attributes). [`Constraints::evaluate`] produces the same
//! flags a browser would, and [`Constraints::validation_message`] the message the
//! browser would show. Length limits only apply to values the user has edited,
//! and are counted in UTF-16 code units, as in the DOM.

use std::fmt;

/// The `type` attribute of an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Url,
}

/// A whole-value pattern over a character class (the `pattern` attribute).
///
/// `source` is the attribute text; `allowed` decides membership for a single
/// character. An empty value never mismatches.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    allowed: fn(char) -> bool,
}

impl Pattern {
    pub fn new(source: impl Into<String>, allowed: fn(char) -> bool) -> Self {
        Self {
            source: source.into(),
            allowed,
        }
    }

    /// Latin and Cyrillic letters, hyphens and spaces.
    pub fn name_like() -> Self {
        Self::new(r"^[a-zA-Zа-яА-ЯёЁ\- ]+$", |c| {
            c.is_ascii_alphabetic()
                || ('а'..='я').contains(&c)
                || ('А'..='Я').contains(&c)
                || c == 'ё'
                || c == 'Ё'
                || c == '-'
                || c == ' '
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, value: &str) -> bool {
        value.is_empty() || value.chars().all(self.allowed)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Constraint attributes of one input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constraints {
    pub kind: InputKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

/// Validity flags, mirroring the DOM's `ValidityState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub custom_error: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.custom_error)
    }
}

impl Constraints {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn url() -> Self {
        Self {
            kind: InputKind::Url,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compute the validity flags for `value`.
    ///
    /// `dirty` is the DOM's "dirty value flag": set once the user has edited the
    /// field. `custom_validity` is the current `setCustomValidity` message.
    pub fn evaluate(&self, value: &str, dirty: bool, custom_validity: &str) -> ValidityState {
        let value = self.sanitize(value);
        let len = utf16_len(value);
        let non_empty = !value.is_empty();

        ValidityState {
            value_missing: self.required && !non_empty,
            type_mismatch: non_empty
                && self.kind == InputKind::Url
                && url::Url::parse(value).is_err(),
            pattern_mismatch: non_empty
                && self.pattern.as_ref().is_some_and(|p| !p.matches(value)),
            too_long: dirty && non_empty && self.max_length.is_some_and(|max| len > max),
            too_short: dirty && non_empty && self.min_length.is_some_and(|min| len < min),
            custom_error: !custom_validity.is_empty(),
        }
    }

    /// The message a browser shows for `validity`, or an empty string when valid.
    pub fn validation_message(
        &self,
        validity: &ValidityState,
        value: &str,
        custom_validity: &str,
    ) -> String {
        let len = utf16_len(self.sanitize(value));
        if validity.custom_error {
            custom_validity.to_string()
        } else if validity.value_missing {
            "Please fill out this field.".to_string()
        } else if validity.type_mismatch {
            "Please enter a URL.".to_string()
        } else if validity.pattern_mismatch {
            "Please match the requested format.".to_string()
        } else if validity.too_long {
            let max = self.max_length.unwrap_or_default();
            format!(
                "Please shorten this text to {max} characters or less (you are currently using {}).",
                characters(len)
            )
        } else if validity.too_short {
            let min = self.min_length.unwrap_or_default();
            format!(
                "Please lengthen this text to {} or more (you are currently using {}).",
                characters(min),
                characters(len)
            )
        } else {
            String::new()
        }
    }

    // URL inputs strip surrounding whitespace from their value.
    fn sanitize<'a>(&self, value: &'a str) -> &'a str {
        match self.kind {
            InputKind::Url => value.trim(),
            InputKind::Text => value,
        }
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn characters(n: usize) -> String {
    if n == 1 {
        "1 character".to_string()
    } else {
        format!("{n} characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_constraints() -> Constraints {
        Constraints::text()
            .required()
            .min_length(2)
            .max_length(40)
            .pattern(Pattern::name_like())
    }

    #[test]
    fn test_required_empty_is_value_missing() {
        let c = name_constraints();
        let v = c.evaluate("", true, "");
        assert!(v.value_missing);
        assert!(!v.pattern_mismatch);
        assert!(!v.too_short);
        assert_eq!(c.validation_message(&v, "", ""), "Please fill out this field.");
    }

    #[test]
    fn test_length_limits_only_apply_to_edited_values() {
        let c = name_constraints();
        assert!(c.evaluate("J", false, "").valid());

        let v = c.evaluate("J", true, "");
        assert!(v.too_short);
        assert_eq!(
            c.validation_message(&v, "J", ""),
            "Please lengthen this text to 2 characters or more (you are currently using 1 character)."
        );

        let long = "a".repeat(41);
        let v = c.evaluate(&long, true, "");
        assert!(v.too_long);
        assert!(c.validation_message(&v, &long, "").starts_with("Please shorten this text to 40"));
    }

    #[test]
    fn test_cyrillic_counts_as_one_unit_per_letter() {
        let c = name_constraints();
        assert!(c.evaluate("Жак", true, "").valid());
        assert!(c.evaluate("Жак-Ив Кусто", true, "").valid());
    }

    #[test]
    fn test_pattern_mismatch() {
        let c = name_constraints();
        let v = c.evaluate("R2-D2", true, "");
        assert!(v.pattern_mismatch);
        assert!(!v.valid());
        assert_eq!(c.validation_message(&v, "R2-D2", ""), "Please match the requested format.");
    }

    #[test]
    fn test_url_type_mismatch() {
        let c = Constraints::url().required();
        assert!(c.evaluate("not a url", true, "").type_mismatch);
        assert!(c.evaluate(" https://example.com/a.jpg ", true, "").valid());
        let v = c.evaluate("u", true, "");
        assert_eq!(c.validation_message(&v, "u", ""), "Please enter a URL.");
    }

    #[test]
    fn test_custom_validity_takes_precedence() {
        let c = name_constraints();
        let v = c.evaluate("R2", true, "Letters only");
        assert!(v.custom_error && v.pattern_mismatch);
        assert_eq!(c.validation_message(&v, "R2", "Letters only"), "Letters only");
    }
}
