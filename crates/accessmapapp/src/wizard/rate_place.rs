//! The "rate place" form.
//!
//! Steps: a 1..=5 star rating (plus an optional recommendation), confirmation
//! of the accessibility features the visitor actually found, and a free-form
//! review.

use super::{
    accessibility_list, is_accessibility_list, optional_text, FieldSpec, FieldValue, FieldValues,
    FormSpec, Rule, StepSpec, WizardState,
};
use crate::error::{AccessmapError, Result};
use crate::model::Accessibility;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const SUBMITTED_MESSAGE: &str = "Спасибо за вашу оценку!";

/// Labels for 1..=5 stars.
pub const RATING_LABELS: [&str; 5] = ["Ужасно", "Плохо", "Нормально", "Хорошо", "Отлично"];

pub fn rating_label(stars: u8) -> Option<&'static str> {
    match stars {
        1..=5 => Some(RATING_LABELS[usize::from(stars) - 1]),
        _ => None,
    }
}

pub static FORM: FormSpec = FormSpec {
    name: "rate_place",
    steps: &[
        StepSpec {
            title: "Оценка",
            fields: &[
                FieldSpec::new("rating", "Оценка").rules(&[
                    Rule::Required("Пожалуйста, поставьте оценку"),
                    Rule::Range {
                        min: 1,
                        max: 5,
                        message: "Пожалуйста, поставьте оценку",
                    },
                ]),
                FieldSpec::new("recommend", "Порекомендуете это место?"),
            ],
        },
        StepSpec {
            title: "Доступность",
            fields: &[
                FieldSpec::new("confirmed_accessibility", "Подтвердите удобства").rules(&[
                    Rule::Check(is_accessibility_list, "Неизвестный тип доступности"),
                ]),
                FieldSpec::new("accessibility_notes", "Заметки о доступности"),
            ],
        },
        StepSpec {
            title: "Отзыв",
            fields: &[FieldSpec::new("comment", "Отзыв").rules(&[Rule::MaxChars(
                2000,
                "Отзыв не должен превышать 2000 символов",
            )])],
        },
    ],
};

pub fn start() -> WizardState {
    WizardState::new(&FORM)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub place_id: String,
    pub rating: u8,
    pub recommend: Option<bool>,
    pub confirmed_accessibility: Vec<Accessibility>,
    pub accessibility_notes: Option<String>,
    pub comment: Option<String>,
}

impl RatingSubmission {
    pub fn from_values(place_id: &str, values: &FieldValues) -> Result<Self> {
        let rating = values
            .get("rating")
            .and_then(FieldValue::as_integer)
            .and_then(|n| u8::try_from(n).ok())
            .filter(|n| (1..=5).contains(n))
            .ok_or_else(|| AccessmapError::Api("missing or invalid rating".to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            place_id: place_id.to_string(),
            rating,
            recommend: values.get("recommend").and_then(FieldValue::as_bool),
            confirmed_accessibility: accessibility_list(values, "confirmed_accessibility")?,
            accessibility_notes: optional_text(values, "accessibility_notes"),
            comment: optional_text(values, "comment"),
        })
    }
}
