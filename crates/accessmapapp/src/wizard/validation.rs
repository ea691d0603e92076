//! Field validation rules.
//!
//! Rules are evaluated in declaration order and the first failure wins. Only
//! [`Rule::Required`] looks at empty values: every other rule passes when the
//! field is absent or blank, so optional fields are validated only once the
//! user types something.
//!
//! ```
//! use accessmapapp::wizard::{FieldValue, Rule};
//!
//! let phone = Rule::Phone("bad phone");
//! assert!(phone.check(Some(&FieldValue::from("+7 (495) 123-45-67"))).is_ok());
//! assert!(phone.check(Some(&FieldValue::from("call me"))).is_err());
//! assert!(phone.check(None).is_ok());
//! ```

use super::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]{5,20}$").expect("phone pattern is valid"));

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#][^\s]*$").expect("url pattern is valid")
});

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required(&'static str),
    /// Minimum length in characters, not bytes.
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    Phone(&'static str),
    /// Absolute http or https URL.
    Url(&'static str),
    /// Inclusive integer range. Text is accepted if it parses as an integer.
    Range {
        min: i64,
        max: i64,
        message: &'static str,
    },
    /// Arbitrary predicate over a non-empty value.
    Check(fn(&FieldValue) -> bool, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(m)
            | Rule::MinChars(_, m)
            | Rule::MaxChars(_, m)
            | Rule::Phone(m)
            | Rule::Url(m)
            | Rule::Check(_, m) => m,
            Rule::Range { message, .. } => message,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Rule::Required(_))
    }

    /// `Err` carries the rule's message.
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), &'static str> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                return if self.is_required() {
                    Err(self.message())
                } else {
                    Ok(())
                }
            }
        };

        let ok = match self {
            Rule::Required(_) => true,
            Rule::MinChars(min, _) => value.as_text().map_or(true, |s| s.chars().count() >= *min),
            Rule::MaxChars(max, _) => value.as_text().map_or(true, |s| s.chars().count() <= *max),
            Rule::Phone(_) => value.as_text().is_some_and(|s| PHONE_RE.is_match(s)),
            Rule::Url(_) => value.as_text().is_some_and(|s| URL_RE.is_match(s.trim())),
            Rule::Range { min, max, .. } => value
                .as_integer()
                .is_some_and(|n| (*min..=*max).contains(&n)),
            Rule::Check(predicate, _) => predicate(value),
        };

        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

/// First failing message of `rules` against `value`.
pub fn first_error(rules: &[Rule], value: Option<&FieldValue>) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value).err())
}
