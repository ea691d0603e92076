//! Application state.
//!
//! [`AppState`] is the UI selection state a client carries between views:
//! the chosen locality, the filter panel selections and the current favorites
//! snapshot. It is an immutable value. Every update returns a new snapshot
//! and leaves the receiver untouched, so a client can keep the previous one
//! around (for undo, diffing, or simply comparing before and after).

use crate::favorites::Favorites;
use crate::filter::PlaceFilter;
use crate::model::{Accessibility, PlaceCategory};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    locality: String,
    categories: BTreeSet<PlaceCategory>,
    accessibility: BTreeSet<Accessibility>,
    favorites: Favorites,
}

impl AppState {
    pub fn new(locality: impl Into<String>) -> Self {
        Self {
            locality: locality.into(),
            categories: BTreeSet::new(),
            accessibility: BTreeSet::new(),
            favorites: Favorites::default(),
        }
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn categories(&self) -> &BTreeSet<PlaceCategory> {
        &self.categories
    }

    pub fn accessibility(&self) -> &BTreeSet<Accessibility> {
        &self.accessibility
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn with_locality(&self, locality: impl Into<String>) -> Self {
        Self {
            locality: locality.into(),
            ..self.clone()
        }
    }

    pub fn with_favorites(&self, favorites: Favorites) -> Self {
        Self {
            favorites,
            ..self.clone()
        }
    }

    pub fn toggle_category(&self, category: PlaceCategory) -> Self {
        let mut next = self.clone();
        if !next.categories.remove(&category) {
            next.categories.insert(category);
        }
        next
    }

    pub fn toggle_accessibility(&self, tag: Accessibility) -> Self {
        let mut next = self.clone();
        if !next.accessibility.remove(&tag) {
            next.accessibility.insert(tag);
        }
        next
    }

    pub fn reset_filters(&self) -> Self {
        Self {
            categories: BTreeSet::new(),
            accessibility: BTreeSet::new(),
            ..self.clone()
        }
    }

    /// Filter for the listing view: scoped to the locality.
    pub fn listing_filter(&self) -> PlaceFilter {
        PlaceFilter::new()
            .in_locality(self.locality.clone())
            .with_categories(self.categories.iter().copied())
            .with_accessibility(self.accessibility.iter().copied())
    }

    /// Filter for the favorites view. Favorites span every locality.
    pub fn favorites_filter(&self) -> PlaceFilter {
        PlaceFilter::new().favorites_only()
    }

    pub fn active_filter_count(&self) -> usize {
        self.listing_filter().active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_return_new_snapshots() {
        let base = AppState::new("moscow");
        let next = base
            .with_locality("spb")
            .toggle_category(PlaceCategory::Park)
            .toggle_accessibility(Accessibility::Motor);

        assert_eq!(base.locality(), "moscow");
        assert!(base.categories().is_empty());
        assert_eq!(next.locality(), "spb");
        assert_eq!(next.active_filter_count(), 2);
    }

    #[test]
    fn toggles_are_self_inverse() {
        let base = AppState::new("moscow").toggle_category(PlaceCategory::Bank);
        assert_eq!(
            base.toggle_category(PlaceCategory::Park)
                .toggle_category(PlaceCategory::Park),
            base
        );
        assert_eq!(
            base.toggle_accessibility(Accessibility::Speech)
                .toggle_accessibility(Accessibility::Speech),
            base
        );
    }

    #[test]
    fn reset_keeps_locality_and_favorites() {
        let favorites = Favorites::from(vec!["1".to_string()]);
        let state = AppState::new("kazan")
            .with_favorites(favorites.clone())
            .toggle_category(PlaceCategory::Culture)
            .toggle_accessibility(Accessibility::Visual)
            .reset_filters();

        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.locality(), "kazan");
        assert_eq!(state.favorites(), &favorites);
    }

    #[test]
    fn view_filters() {
        let state = AppState::new("ekb").toggle_category(PlaceCategory::Culture);
        let listing = state.listing_filter();
        assert_eq!(listing.locality.as_deref(), Some("ekb"));
        assert!(!listing.favorites_only);

        let favorites = state.favorites_filter();
        assert_eq!(favorites.locality, None);
        assert!(favorites.favorites_only);
        assert_eq!(favorites.active_count(), 0);
    }
}
