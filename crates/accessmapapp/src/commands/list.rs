use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ListedPlace, EMPTY_PLACES_MESSAGE};
use crate::error::Result;
use crate::filter::PlaceFilter;
use crate::state::AppState;

/// Listing view: places in the selected locality matching the filter panel.
pub fn run(catalog: &Catalog, state: &AppState) -> Result<CmdResult> {
    Ok(listed(catalog, state, &state.listing_filter()))
}

/// Favorites view: every favorited place, regardless of locality.
pub fn favorites(catalog: &Catalog, state: &AppState) -> Result<CmdResult> {
    Ok(listed(catalog, state, &state.favorites_filter()))
}

fn listed(catalog: &Catalog, state: &AppState, filter: &PlaceFilter) -> CmdResult {
    let favorites = state.favorites();
    let places: Vec<ListedPlace> = filter
        .apply(catalog.places(), favorites)
        .into_iter()
        .map(|place| ListedPlace::new(place, favorites.contains(&place.id)))
        .collect();

    let mut result = CmdResult::default();
    if places.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_PLACES_MESSAGE));
    }
    result.with_listed_places(places)
}
