//! # Domain Model
//!
//! Typed records for the directory: [`Locality`], [`Place`] (with its nested
//! [`Rating`] and [`Parking`]), [`Accessibility`] tags, [`PlaceCategory`] and
//! [`Comment`].
//!
//! All of these are reference data. They are built once by the catalog and
//! only ever read afterwards.
//!
//! ## Presentation Metadata
//!
//! Each closed enumeration owns exactly one metadata table (icon, color,
//! labels). Presentation code asks the enum (`Accessibility::info()`,
//! `PlaceCategory::info()`, `EntranceType::label()`) rather than keeping a
//! lookup table of its own.

mod accessibility;
mod category;
mod place;

pub use accessibility::{Accessibility, AccessibilityInfo, ACCESSIBILITY};
pub use category::{
    search_categories, CategoryInfo, PlaceCategory, CATEGORIES, POPULAR_CATEGORIES,
};
pub use place::{EntranceType, Parking, ParkingType, Place, Rating, RatingSummary};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A city or region used to scope the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub id: String,
    pub name: String,
}

impl Locality {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub place_id: String,
    pub author: String,
    /// ISO-ish date: either RFC 3339 or a bare `YYYY-MM-DD`.
    pub date: String,
    pub body: String,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        place_id: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            place_id: place_id.into(),
            author: author.into(),
            date: date.into(),
            body: body.into(),
        }
    }

    /// Avatar initials: first letter of up to two words, uppercased.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Parsed comment date, or `None` when the source string is not a date
    /// we understand (callers then show the raw string).
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Date rendered as `DD.MM.YYYY`, falling back to the raw string.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(dt) => dt.format("%d.%m.%Y").to_string(),
            None => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, date: &str) -> Comment {
        Comment::new("c1", "p1", author, date, "Удобный пандус")
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(comment("анна петровна смирнова", "2024-01-01").initials(), "АП");
        assert_eq!(comment("Oleg", "2024-01-01").initials(), "O");
        assert_eq!(comment("", "2024-01-01").initials(), "");
    }

    #[test]
    fn parses_bare_dates_and_rfc3339() {
        assert_eq!(comment("a", "2024-03-15").display_date(), "15.03.2024");
        assert_eq!(
            comment("a", "2024-03-15T10:30:00+03:00").display_date(),
            "15.03.2024"
        );
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        let c = comment("a", "вчера");
        assert!(c.parsed_date().is_none());
        assert_eq!(c.display_date(), "вчера");
    }
}
