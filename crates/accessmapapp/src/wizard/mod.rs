//! # Form Wizard
//!
//! A generic linear multi-step form. A [`FormSpec`] declares the steps, each
//! step declares the fields it owns, and each field declares its [`Rule`]s.
//! The declaration is the single source of truth for which fields gate which
//! step: nothing is validated that the current step does not list.
//!
//! ## State Machine
//!
//! [`WizardState`] is an immutable snapshot: a step index plus the values
//! entered so far. Every operation returns a [`Transition`] holding the next
//! snapshot and an [`Outcome`] describing what happened:
//!
//! | Operation   | From              | Success                     | Failure                    |
//! |-------------|-------------------|-----------------------------|----------------------------|
//! | `advance`   | non-final index   | index + 1                   | same index, errors set     |
//! | `advance`   | final index       | behaves as `submit`         |                            |
//! | `retreat`   | index > 0         | index - 1, no validation    |                            |
//! | `retreat`   | index 0           | unchanged                   |                            |
//! | `submit`    | final index       | fresh state, values handed over | same index, errors set |
//! | `submit`    | other index       | unchanged, `NotAtFinalStep` |                            |
//! | `cancel`    | any               | fresh state                 |                            |
//!
//! Values are never lost on a rejected transition.
//!
//! ## Forms
//!
//! - [`add_place`]: propose a new place (three steps).
//! - [`rate_place`]: rate an existing place (three steps).

pub mod add_place;
pub mod rate_place;
mod validation;

pub use validation::{first_error, Rule};

use crate::error::{AccessmapError, Result};
use crate::model::Accessibility;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A value entered into a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Blank text and empty lists count as "not filled in". Numbers and
    /// booleans are always filled in.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numbers as is, text if it parses as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Collected field values, keyed by field name.
pub type FieldValues = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// A field with no rules.
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            rules: &[],
        }
    }

    pub const fn rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(Rule::is_required)
    }

    /// First failing rule message for `value`, if any.
    pub fn validate(&self, value: Option<&FieldValue>) -> Option<&'static str> {
        first_error(self.rules, value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug)]
pub struct FormSpec {
    pub name: &'static str,
    pub steps: &'static [StepSpec],
}

impl FormSpec {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.name == name)
    }
}

/// Per-field error messages, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// What an operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Advanced,
    Retreated,
    /// Validation failed; the returned state carries the errors.
    Rejected,
    /// The form completed. The state is reset and these are the final values.
    Submitted(FieldValues),
    Cancelled,
    /// `submit` was called before the last step. Nothing changed.
    NotAtFinalStep,
    /// The operation had nothing to do (`retreat` at the first step).
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: WizardState,
    pub outcome: Outcome,
}

impl Transition {
    fn new(state: WizardState, outcome: Outcome) -> Self {
        Self { state, outcome }
    }
}

#[derive(Debug, Clone)]
pub struct WizardState {
    form: &'static FormSpec,
    index: usize,
    values: FieldValues,
    errors: FieldErrors,
}

impl WizardState {
    pub fn new(form: &'static FormSpec) -> Self {
        Self {
            form,
            index: 0,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn form(&self) -> &'static FormSpec {
        self.form
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_final(&self) -> bool {
        self.index + 1 >= self.form.step_count()
    }

    pub fn current_step(&self) -> &'static StepSpec {
        &self.form.steps[self.index]
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Set a field value. Editing a field clears its previous error.
    pub fn with_value(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
        self
    }

    /// Remove a field value, as if the user cleared the input.
    pub fn without_value(mut self, field: &str) -> Self {
        self.values.remove(field);
        self.errors.remove(field);
        self
    }

    pub fn advance(&self) -> Transition {
        if self.is_final() {
            return self.submit();
        }

        let errors = self.validate_steps(self.index..=self.index);
        if errors.is_empty() {
            let next = WizardState {
                index: self.index + 1,
                errors: FieldErrors::new(),
                ..self.clone()
            };
            Transition::new(next, Outcome::Advanced)
        } else {
            self.rejected(errors)
        }
    }

    pub fn retreat(&self) -> Transition {
        if self.is_first() {
            return Transition::new(self.clone(), Outcome::Unchanged);
        }
        let prev = WizardState {
            index: self.index - 1,
            errors: FieldErrors::new(),
            ..self.clone()
        };
        Transition::new(prev, Outcome::Retreated)
    }

    /// Validate every step and complete the form.
    pub fn submit(&self) -> Transition {
        if !self.is_final() {
            return Transition::new(self.clone(), Outcome::NotAtFinalStep);
        }

        let errors = self.validate_steps(0..=self.index);
        if errors.is_empty() {
            tracing::debug!(form = self.form.name, "wizard submitted");
            Transition::new(
                WizardState::new(self.form),
                Outcome::Submitted(self.values.clone()),
            )
        } else {
            self.rejected(errors)
        }
    }

    pub fn cancel(&self) -> Transition {
        Transition::new(WizardState::new(self.form), Outcome::Cancelled)
    }

    /// Index of the first step with a failing field, if any.
    pub fn first_invalid_step(&self) -> Option<usize> {
        (0..self.form.step_count()).find(|&i| !self.validate_steps(i..=i).is_empty())
    }

    fn validate_steps(&self, steps: std::ops::RangeInclusive<usize>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for step in &self.form.steps[steps] {
            for field in step.fields {
                if let Some(message) = field.validate(self.values.get(field.name)) {
                    errors.insert(field.name, message);
                }
            }
        }
        errors
    }

    fn rejected(&self, errors: FieldErrors) -> Transition {
        tracing::debug!(form = self.form.name, step = self.index, %errors, "wizard step rejected");
        let state = WizardState {
            errors,
            ..self.clone()
        };
        Transition::new(state, Outcome::Rejected)
    }
}

// Shared by the concrete forms.

pub(crate) fn is_accessibility_list(value: &FieldValue) -> bool {
    value.as_list().is_some_and(|tags| {
        tags.iter()
            .all(|tag| tag.parse::<Accessibility>().is_ok())
    })
}

/// Trimmed text of `field`, `None` when absent or blank.
pub(crate) fn optional_text(values: &FieldValues, field: &str) -> Option<String> {
    values
        .get(field)
        .and_then(FieldValue::as_text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn required_text(values: &FieldValues, field: &str) -> Result<String> {
    optional_text(values, field)
        .ok_or_else(|| AccessmapError::Api(format!("missing field '{}'", field)))
}

pub(crate) fn accessibility_list(
    values: &FieldValues,
    field: &str,
) -> Result<Vec<Accessibility>> {
    let Some(tags) = values.get(field).and_then(FieldValue::as_list) else {
        return Ok(Vec::new());
    };
    let mut parsed = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag
            .parse::<Accessibility>()
            .map_err(AccessmapError::Api)?;
        if !parsed.contains(&tag) {
            parsed.push(tag);
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    static FORM: FormSpec = FormSpec {
        name: "test",
        steps: &[
            StepSpec {
                title: "one",
                fields: &[
                    FieldSpec::new("name", "Name")
                        .rules(&[Rule::Required("name required"), Rule::MinChars(3, "too short")]),
                    FieldSpec::new("note", "Note").rules(&[Rule::MaxChars(5, "note too long")]),
                ],
            },
            StepSpec {
                title: "two",
                fields: &[FieldSpec::new("phone", "Phone").rules(&[Rule::Phone("bad phone")])],
            },
            StepSpec {
                title: "three",
                fields: &[FieldSpec::new("score", "Score").rules(&[
                    Rule::Required("score required"),
                    Rule::Range {
                        min: 1,
                        max: 5,
                        message: "score out of range",
                    },
                ])],
            },
        ],
    };

    fn filled() -> WizardState {
        WizardState::new(&FORM)
            .with_value("name", "Кафе")
            .with_value("phone", "+7 999 123")
            .with_value("score", 4i64)
    }

    #[test]
    fn advance_with_required_filled_moves_forward() {
        let t = WizardState::new(&FORM).with_value("name", "Library").advance();
        assert_eq!(t.outcome, Outcome::Advanced);
        assert_eq!(t.state.index(), 1);
    }

    #[test]
    fn advance_with_required_empty_keeps_index_and_values() {
        let start = WizardState::new(&FORM).with_value("note", "hi");
        let t = start.advance();

        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.state.index(), 0);
        assert_eq!(t.state.values(), start.values());
        assert_eq!(t.state.errors().get("name"), Some("name required"));
        assert_eq!(t.state.errors().len(), 1);
    }

    #[test]
    fn advance_validates_only_current_step() {
        // phone is invalid but belongs to step two
        let t = WizardState::new(&FORM)
            .with_value("name", "Library")
            .with_value("phone", "nope")
            .advance();
        assert_eq!(t.outcome, Outcome::Advanced);

        let t = t.state.advance();
        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.state.errors().get("phone"), Some("bad phone"));
    }

    #[test]
    fn retreat_keeps_values_and_skips_validation() {
        let at_one = WizardState::new(&FORM)
            .with_value("name", "Library")
            .advance()
            .state
            .with_value("phone", "garbage");

        let back = at_one.retreat();
        assert_eq!(back.outcome, Outcome::Retreated);
        assert_eq!(back.state.index(), 0);
        assert_eq!(back.state.value("name"), Some(&FieldValue::from("Library")));
        assert_eq!(back.state.value("phone"), Some(&FieldValue::from("garbage")));
        assert!(back.state.errors().is_empty());
    }

    #[test]
    fn retreat_at_first_step_is_noop() {
        let t = WizardState::new(&FORM).retreat();
        assert_eq!(t.outcome, Outcome::Unchanged);
        assert_eq!(t.state.index(), 0);
    }

    #[test]
    fn submit_before_final_step_is_reported() {
        let t = filled().submit();
        assert_eq!(t.outcome, Outcome::NotAtFinalStep);
        assert_eq!(t.state.index(), 0);
        assert_eq!(t.state.values().len(), 3);
    }

    #[test]
    fn advance_at_final_step_submits_and_resets() {
        let at_final = filled().advance().state.advance().state;
        assert!(at_final.is_final());

        let t = at_final.advance();
        match t.outcome {
            Outcome::Submitted(values) => {
                assert_eq!(values.get("score"), Some(&FieldValue::Number(4)));
                assert_eq!(values.len(), 3);
            }
            other => panic!("expected submit, got {:?}", other),
        }
        assert_eq!(t.state.index(), 0);
        assert!(t.state.values().is_empty());
    }

    #[test]
    fn submit_revalidates_earlier_steps() {
        let at_final = filled().advance().state.advance().state;
        // corrupt a step-one field after leaving it
        let t = at_final.with_value("name", "ab").submit();

        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.state.index(), 2);
        assert_eq!(t.state.errors().get("name"), Some("too short"));
        assert_eq!(t.state.first_invalid_step(), Some(0));
    }

    #[test]
    fn cancel_clears_everything() {
        let t = filled().advance().state.cancel();
        assert_eq!(t.outcome, Outcome::Cancelled);
        assert_eq!(t.state.index(), 0);
        assert!(t.state.values().is_empty());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let rejected = WizardState::new(&FORM).advance().state;
        assert!(rejected.errors().get("name").is_some());
        let edited = rejected.with_value("name", "x");
        assert!(edited.errors().get("name").is_none());
    }

    #[test]
    fn field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "bad phone");
        errors.insert("name", "required");
        assert_eq!(errors.to_string(), "name: required; phone: bad phone");
    }

    #[test]
    fn field_value_emptiness() {
        assert!(FieldValue::from(" ").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::Number(0).is_empty());
    }

    #[test]
    fn accessibility_list_parses_and_dedups_tags() {
        let tags = vec!["motor".to_string(), "visual".to_string(), "motor".to_string()];
        let mut values = FieldValues::new();
        values.insert("tags".to_string(), FieldValue::from(tags.clone()));

        assert!(is_accessibility_list(&FieldValue::from(tags)));
        assert_eq!(
            accessibility_list(&values, "tags").unwrap(),
            vec![Accessibility::Motor, Accessibility::Visual]
        );
        assert!(accessibility_list(&values, "absent").unwrap().is_empty());

        let bad = FieldValue::from(vec!["wheelchair".to_string()]);
        assert!(!is_accessibility_list(&bad));
    }
}
