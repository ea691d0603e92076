//! The "add place" form: a user proposes a new place for moderation.
//!
//! Three steps: basic info, category and contacts, accessibility. Nothing is
//! stored on completion; the values become a [`PlaceSubmission`] receipt.

use super::{
    accessibility_list, is_accessibility_list, optional_text, required_text, FieldSpec,
    FieldValue, FieldValues, FormSpec, Rule, StepSpec, WizardState,
};
use crate::catalog::Catalog;
use crate::error::{AccessmapError, Result};
use crate::model::{Accessibility, PlaceCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const SUBMITTED_MESSAGE: &str = "Добавленное место отправлено на модерацию!";

fn is_known_locality(value: &FieldValue) -> bool {
    value
        .as_text()
        .is_some_and(|id| Catalog::builtin().has_locality(id.trim()))
}

fn is_known_category(value: &FieldValue) -> bool {
    value
        .as_text()
        .is_some_and(|c| c.parse::<PlaceCategory>().is_ok())
}

pub static FORM: FormSpec = FormSpec {
    name: "add_place",
    steps: &[
        StepSpec {
            title: "Основная информация",
            fields: &[
                FieldSpec::new("locality_id", "Населенный пункт").rules(&[
                    Rule::Required("Выберите населенный пункт"),
                    Rule::Check(is_known_locality, "Неизвестный населенный пункт"),
                ]),
                FieldSpec::new("address", "Адрес").rules(&[Rule::Required("Введите адрес")]),
                FieldSpec::new("name", "Название места").rules(&[
                    Rule::Required("Введите название места"),
                    Rule::MinChars(3, "Введите название места"),
                    Rule::MaxChars(100, "Введите название места"),
                ]),
                FieldSpec::new("description", "Описание места").rules(&[Rule::MaxChars(
                    500,
                    "Описание не должно превышать 500 символов",
                )]),
            ],
        },
        StepSpec {
            title: "Категория и контакты",
            fields: &[
                FieldSpec::new("category", "Категория").rules(&[
                    Rule::Required("Выберите категорию"),
                    Rule::Check(is_known_category, "Неизвестная категория"),
                ]),
                FieldSpec::new("phone", "Телефон")
                    .rules(&[Rule::Phone("Введите корректный номер телефона")]),
                FieldSpec::new("website", "Веб-сайт").rules(&[Rule::Url(
                    "Введите корректный URL (например: https://example.com)",
                )]),
                FieldSpec::new("work_hours", "Режим работы"),
            ],
        },
        StepSpec {
            title: "Доступность",
            fields: &[
                FieldSpec::new("accessibility", "Удобства").rules(&[Rule::Check(
                    is_accessibility_list,
                    "Неизвестный тип доступности",
                )]),
                FieldSpec::new(
                    "additional_accessibility_info",
                    "Дополнительная информация о доступности",
                )
                .rules(&[Rule::MaxChars(
                    300,
                    "Дополнительная информация не должна превышать 300 символов",
                )]),
            ],
        },
    ],
};

/// A fresh wizard at the first step.
pub fn start() -> WizardState {
    WizardState::new(&FORM)
}

/// A completed "add place" form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub locality_id: String,
    pub address: String,
    pub name: String,
    pub description: Option<String>,
    pub category: PlaceCategory,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub work_hours: Option<String>,
    pub accessibility: Vec<Accessibility>,
    pub additional_accessibility_info: Option<String>,
}

impl PlaceSubmission {
    /// Build a receipt from submitted wizard values.
    pub fn from_values(values: &FieldValues) -> Result<Self> {
        let category = required_text(values, "category")?
            .parse::<PlaceCategory>()
            .map_err(AccessmapError::Api)?;

        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            locality_id: required_text(values, "locality_id")?,
            address: required_text(values, "address")?,
            name: required_text(values, "name")?,
            description: optional_text(values, "description"),
            category,
            phone: optional_text(values, "phone"),
            website: optional_text(values, "website"),
            work_hours: optional_text(values, "work_hours"),
            accessibility: accessibility_list(values, "accessibility")?,
            additional_accessibility_info: optional_text(values, "additional_accessibility_info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Outcome;

    fn step_one() -> WizardState {
        start()
            .with_value("locality_id", "kazan")
            .with_value("address", "ул. Баумана, 1")
            .with_value("name", "Чайхана")
    }

    #[test]
    fn form_has_three_steps_with_declared_fields() {
        assert_eq!(FORM.step_count(), 3);
        let names: Vec<_> = FORM.fields().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "locality_id",
                "address",
                "name",
                "description",
                "category",
                "phone",
                "website",
                "work_hours",
                "accessibility",
                "additional_accessibility_info",
            ]
        );
        assert!(FORM.field("name").unwrap().is_required());
        assert!(!FORM.field("phone").unwrap().is_required());
    }

    #[test]
    fn step_one_requires_locality_address_and_name() {
        let t = start().advance();
        assert_eq!(t.outcome, Outcome::Rejected);
        let errors = t.state.errors();
        assert_eq!(errors.get("locality_id"), Some("Выберите населенный пункт"));
        assert_eq!(errors.get("address"), Some("Введите адрес"));
        assert_eq!(errors.get("name"), Some("Введите название места"));
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn name_length_is_bounded() {
        let short = step_one().with_value("name", "Аб").advance();
        assert_eq!(short.outcome, Outcome::Rejected);

        let long = step_one().with_value("name", "я".repeat(101)).advance();
        assert_eq!(long.outcome, Outcome::Rejected);

        let max = step_one().with_value("name", "я".repeat(100)).advance();
        assert_eq!(max.outcome, Outcome::Advanced);
    }

    #[test]
    fn unknown_locality_is_rejected() {
        let t = step_one().with_value("locality_id", "atlantis").advance();
        assert_eq!(
            t.state.errors().get("locality_id"),
            Some("Неизвестный населенный пункт")
        );
    }

    #[test]
    fn step_two_checks_contacts_only_when_given() {
        let at_two = step_one().advance().state;
        let t = at_two.clone().with_value("category", "cafe_restaurant").advance();
        assert_eq!(t.outcome, Outcome::Advanced);

        let t = at_two
            .with_value("category", "cafe_restaurant")
            .with_value("phone", "звоните")
            .with_value("website", "example")
            .advance();
        assert_eq!(t.outcome, Outcome::Rejected);
        assert!(t.state.errors().get("phone").is_some());
        assert!(t.state.errors().get("website").is_some());
    }

    #[test]
    fn completed_form_becomes_submission() {
        let at_final = step_one()
            .with_value("description", "  Уютно  ")
            .advance()
            .state
            .with_value("category", "cafe_restaurant")
            .with_value("website", "https://chaihana.example")
            .advance()
            .state
            .with_value(
                "accessibility",
                vec!["motor".to_string(), "hearing".to_string(), "motor".to_string()],
            );

        let t = at_final.advance();
        let Outcome::Submitted(values) = t.outcome else {
            panic!("expected submission");
        };
        assert_eq!(t.state.index(), 0);

        let submission = PlaceSubmission::from_values(&values).unwrap();
        assert_eq!(submission.locality_id, "kazan");
        assert_eq!(submission.category, PlaceCategory::CafeRestaurant);
        assert_eq!(submission.description.as_deref(), Some("Уютно"));
        assert_eq!(submission.phone, None);
        assert_eq!(
            submission.accessibility,
            vec![Accessibility::Motor, Accessibility::Hearing]
        );
    }

    #[test]
    fn unknown_accessibility_tag_blocks_submit() {
        let at_final = step_one()
            .advance()
            .state
            .with_value("category", "park")
            .advance()
            .state
            .with_value("accessibility", vec!["telepathy".to_string()]);
        let t = at_final.submit();
        assert_eq!(t.outcome, Outcome::Rejected);
        assert_eq!(t.state.index(), 2);
    }
}
