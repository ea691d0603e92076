use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ListedPlace, PlaceDetail, EMPTY_COMMENTS_MESSAGE};
use crate::error::{AccessmapError, Result};
use crate::favorites::Favorites;

pub fn run(catalog: &Catalog, favorites: &Favorites, place_id: &str) -> Result<CmdResult> {
    let place = catalog
        .place(place_id)
        .ok_or_else(|| AccessmapError::PlaceNotFound(place_id.to_string()))?;

    let comments: Vec<_> = catalog
        .comments_for(&place.id)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if comments.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_COMMENTS_MESSAGE));
    }

    Ok(result.with_detail(PlaceDetail {
        place: ListedPlace::new(place, favorites.contains(&place.id)),
        locality: catalog.locality(&place.locality_id).cloned(),
        comments,
    }))
}
