//! Place filtering.
//!
//! [`PlaceFilter`] narrows a place collection in four stages, applied in
//! order: locality, category, accessibility, favorites. The stages combine
//! with AND, but the two tag-like criteria differ internally:
//!
//! - **Categories** are alternatives: a place matches when its category is
//!   ANY of the selected ones.
//! - **Accessibility** tags are requirements: a place matches only when it
//!   supports ALL of the selected ones.
//!
//! Filtering is stable and pure: output order is source order and nothing
//! outside the arguments is read.

use crate::favorites::Favorites;
use crate::model::{Accessibility, Place, PlaceCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceFilter {
    /// Restrict to a single locality. `None` means every locality.
    pub locality: Option<String>,
    /// Empty means no category restriction.
    pub categories: BTreeSet<PlaceCategory>,
    /// Empty means no accessibility restriction.
    pub accessibility: BTreeSet<Accessibility>,
    /// Keep only places whose id is in the favorites list.
    pub favorites_only: bool,
}

impl PlaceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = PlaceCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_accessibility(mut self, tags: impl IntoIterator<Item = Accessibility>) -> Self {
        self.accessibility.extend(tags);
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    /// Number of selected categories plus selected accessibility tags.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.accessibility.len()
    }

    /// Clear category and accessibility selections. Locality and the
    /// favorites flag are scoped to the view, not the filter panel, and stay.
    pub fn reset(&self) -> Self {
        Self {
            locality: self.locality.clone(),
            categories: BTreeSet::new(),
            accessibility: BTreeSet::new(),
            favorites_only: self.favorites_only,
        }
    }

    /// Check whether a single place passes every active criterion.
    pub fn matches(&self, place: &Place, favorites: &Favorites) -> bool {
        if let Some(locality) = &self.locality {
            if &place.locality_id != locality {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&place.place_category) {
            return false;
        }

        if !self
            .accessibility
            .iter()
            .all(|tag| place.accessibility.contains(tag))
        {
            return false;
        }

        if self.favorites_only && !favorites.contains(&place.id) {
            return false;
        }

        true
    }

    /// Stable filter over `places`.
    pub fn apply<'a>(&self, places: &'a [Place], favorites: &Favorites) -> Vec<&'a Place> {
        places
            .iter()
            .filter(|place| self.matches(place, favorites))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Accessibility::{Hearing, Motor, Visual};
    use PlaceCategory::{CafeRestaurant, Pharmacy, Shopping};

    fn place(id: &str, locality: &str, category: PlaceCategory, tags: &[Accessibility]) -> Place {
        Place::new(id, format!("Place {id}"), "addr", locality, category).with_accessibility(tags)
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Place> {
        vec![
            place("a", "moscow", CafeRestaurant, &[Motor, Visual]),
            place("b", "moscow", Shopping, &[Motor]),
            place("c", "spb", Shopping, &[Visual, Hearing]),
            place("d", "moscow", Pharmacy, &[Motor, Visual, Hearing]),
            place("e", "spb", CafeRestaurant, &[]),
        ]
    }

    #[test]
    fn no_criteria_returns_input_unchanged() {
        let places = sample();
        let result = PlaceFilter::new().apply(&places, &Favorites::default());
        assert_eq!(ids(&result), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn locality_and_category_keep_source_order() {
        let places = vec![
            place("p1", "moscow", CafeRestaurant, &[]),
            place("p2", "moscow", Shopping, &[]),
            place("p3", "moscow", Shopping, &[]),
        ];
        let filter = PlaceFilter::new()
            .in_locality("moscow")
            .with_categories([Shopping]);

        let result = filter.apply(&places, &Favorites::default());
        assert_eq!(ids(&result), vec!["p2", "p3"]);
    }

    #[test]
    fn unknown_locality_yields_empty() {
        let places = sample();
        let result = PlaceFilter::new()
            .in_locality("atlantis")
            .apply(&places, &Favorites::default());
        assert!(result.is_empty());
    }

    #[test]
    fn categories_are_disjunctive() {
        let places = sample();
        let favs = Favorites::default();
        let both = PlaceFilter::new()
            .with_categories([CafeRestaurant, Pharmacy])
            .apply(&places, &favs);
        let cafe = PlaceFilter::new()
            .with_categories([CafeRestaurant])
            .apply(&places, &favs);
        let pharmacy = PlaceFilter::new()
            .with_categories([Pharmacy])
            .apply(&places, &favs);

        assert_eq!(ids(&both), vec!["a", "d", "e"]);
        for p in cafe.iter().chain(pharmacy.iter()) {
            assert!(both.contains(p));
        }
        assert_eq!(both.len(), cafe.len() + pharmacy.len());
    }

    #[test]
    fn accessibility_is_conjunctive() {
        let places = sample();
        let favs = Favorites::default();
        let both = PlaceFilter::new()
            .with_accessibility([Motor, Visual])
            .apply(&places, &favs);
        let motor = PlaceFilter::new()
            .with_accessibility([Motor])
            .apply(&places, &favs);
        let visual = PlaceFilter::new()
            .with_accessibility([Visual])
            .apply(&places, &favs);

        assert_eq!(ids(&both), vec!["a", "d"]);
        for p in &both {
            assert!(motor.contains(p) && visual.contains(p));
        }
    }

    #[test]
    fn favorites_only_keeps_favorite_ids() {
        let places = sample();
        let favs = Favorites::from(vec!["c".to_string(), "a".to_string()]);
        let result = PlaceFilter::new().favorites_only().apply(&places, &favs);
        // Source order, not favorites order.
        assert_eq!(ids(&result), vec!["a", "c"]);
    }

    #[test]
    fn favorites_only_with_no_favorites_is_empty() {
        let places = sample();
        let result = PlaceFilter::new()
            .favorites_only()
            .apply(&places, &Favorites::default());
        assert!(result.is_empty());
    }

    #[test]
    fn all_stages_combine() {
        let places = sample();
        let favs = Favorites::from(vec!["d".to_string(), "b".to_string()]);
        let filter = PlaceFilter::new()
            .in_locality("moscow")
            .with_categories([Shopping, Pharmacy])
            .with_accessibility([Motor])
            .favorites_only();
        assert_eq!(ids(&filter.apply(&places, &favs)), vec!["b", "d"]);

        let stricter = filter.clone().with_accessibility([Hearing]);
        assert_eq!(ids(&stricter.apply(&places, &favs)), vec!["d"]);
    }

    #[test]
    fn active_count_and_reset() {
        let filter = PlaceFilter::new()
            .in_locality("spb")
            .with_categories([Shopping, Pharmacy])
            .with_accessibility([Motor])
            .favorites_only();
        assert_eq!(filter.active_count(), 3);

        let reset = filter.reset();
        assert_eq!(reset.active_count(), 0);
        assert_eq!(reset.locality.as_deref(), Some("spb"));
        assert!(reset.favorites_only);
        // The original snapshot is untouched.
        assert_eq!(filter.active_count(), 3);
    }
}
