//! Wizard completion for non-interactive clients.
//!
//! A client that collects every answer up front (a CLI invocation, an HTTP
//! form post) still goes through the same state machine as an interactive
//! one: values are entered, then the wizard is advanced step by step until it
//! submits or rejects. Rejection is reported as
//! [`AccessmapError::Validation`] naming the first step that failed.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Receipt};
use crate::error::{AccessmapError, Result};
use crate::wizard::add_place::{self, PlaceSubmission};
use crate::wizard::rate_place::{self, RatingSubmission};
use crate::wizard::{FieldValues, Outcome, WizardState};

pub fn add_place(values: &FieldValues) -> Result<CmdResult> {
    let submitted = complete(add_place::start(), values)?;
    let submission = PlaceSubmission::from_values(&submitted)?;
    tracing::info!(id = %submission.id, name = %submission.name, "place submitted for moderation");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(add_place::SUBMITTED_MESSAGE));
    Ok(result.with_receipt(Receipt::Place(submission)))
}

pub fn rate_place(catalog: &Catalog, place_id: &str, values: &FieldValues) -> Result<CmdResult> {
    let place = catalog
        .place(place_id)
        .ok_or_else(|| AccessmapError::PlaceNotFound(place_id.to_string()))?;

    let submitted = complete(rate_place::start(), values)?;
    let submission = RatingSubmission::from_values(&place.id, &submitted)?;
    tracing::info!(id = %submission.id, place = %place.id, rating = submission.rating, "rating submitted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(rate_place::SUBMITTED_MESSAGE));
    Ok(result.with_receipt(Receipt::Rating(submission)))
}

/// Enter `values` and advance until the wizard submits or rejects.
fn complete(start: WizardState, values: &FieldValues) -> Result<FieldValues> {
    let mut state = values
        .iter()
        .fold(start, |state, (field, value)| state.with_value(field, value.clone()));

    loop {
        let transition = state.advance();
        match transition.outcome {
            Outcome::Advanced => state = transition.state,
            Outcome::Submitted(values) => return Ok(values),
            Outcome::Rejected => {
                let rejected = transition.state;
                let step = rejected
                    .first_invalid_step()
                    .map(|i| rejected.form().steps[i].title)
                    .unwrap_or_else(|| rejected.current_step().title);
                return Err(AccessmapError::Validation {
                    step: step.to_string(),
                    errors: rejected.errors().clone(),
                });
            }
            other => {
                return Err(AccessmapError::Api(format!(
                    "unexpected wizard outcome: {:?}",
                    other
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::FieldValue;

    fn values(pairs: &[(&str, FieldValue)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn add_place_produces_receipt() {
        let input = values(&[
            ("locality_id", "nn".into()),
            ("address", "ул. Большая Покровская, 1".into()),
            ("name", "Кофейня на Покровке".into()),
            ("category", "cafe_restaurant".into()),
            ("accessibility", vec!["motor".to_string()].into()),
        ]);
        let result = add_place(&input).unwrap();
        let Some(Receipt::Place(submission)) = result.receipt else {
            panic!("expected place receipt");
        };
        assert_eq!(submission.name, "Кофейня на Покровке");
        assert_eq!(result.messages[0].content, add_place::SUBMITTED_MESSAGE);
    }

    #[test]
    fn add_place_reports_first_failing_step() {
        let input = values(&[
            ("locality_id", "nn".into()),
            ("address", "ул. Рождественская, 5".into()),
            ("name", "Музей".into()),
            ("phone", "abc".into()),
        ]);
        match add_place(&input).unwrap_err() {
            AccessmapError::Validation { step, errors } => {
                assert_eq!(step, "Категория и контакты");
                assert!(errors.get("category").is_some());
                assert!(errors.get("phone").is_some());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rate_place_requires_known_place() {
        let input = values(&[("rating", 5i64.into())]);
        let err = rate_place(Catalog::builtin(), "404", &input).unwrap_err();
        assert!(matches!(err, AccessmapError::PlaceNotFound(_)));
    }

    #[test]
    fn rate_place_without_stars_is_rejected() {
        let err = rate_place(Catalog::builtin(), "1", &FieldValues::new()).unwrap_err();
        match err {
            AccessmapError::Validation { step, errors } => {
                assert_eq!(step, "Оценка");
                assert_eq!(errors.get("rating"), Some("Пожалуйста, поставьте оценку"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rate_place_produces_receipt() {
        let input = values(&[
            ("rating", 4i64.into()),
            ("recommend", true.into()),
            ("comment", "Удобный вход".into()),
        ]);
        let result = rate_place(Catalog::builtin(), "2", &input).unwrap();
        let Some(Receipt::Rating(rating)) = result.receipt else {
            panic!("expected rating receipt");
        };
        assert_eq!(rating.place_id, "2");
        assert_eq!(rating.rating, 4);
        assert_eq!(rating.recommend, Some(true));
    }
}
