use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ListedPlace};
use crate::error::{AccessmapError, Result};
use crate::favorites::FavoritesStore;
use crate::store::KeyValueBackend;

/// Toggle a place in the favorites list.
///
/// Adding requires the place to exist in the catalog. Removing does not: an
/// id whose place has left the catalog can still be dropped from the list.
pub fn toggle<B: KeyValueBackend>(
    catalog: &Catalog,
    store: &mut FavoritesStore<B>,
    place_id: &str,
) -> Result<CmdResult> {
    let Some(place) = catalog.place(place_id) else {
        if !store.current().contains(place_id) {
            return Err(AccessmapError::PlaceNotFound(place_id.to_string()));
        }
        store.toggle(place_id)?;
        tracing::debug!(place_id, "removed favorite missing from catalog");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Удалено из избранного: {}",
            place_id
        )));
        return Ok(result);
    };

    let favorites = store.toggle(&place.id)?;
    let is_favorite = favorites.contains(&place.id);

    let mut result = CmdResult::default();
    let content = if is_favorite {
        format!("Добавлено в избранное: {}", place.name)
    } else {
        format!("Удалено из избранного: {}", place.name)
    };
    result.add_message(CmdMessage::success(content));
    Ok(result.with_listed_places(vec![ListedPlace::new(place, is_favorite)]))
}
