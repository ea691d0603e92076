use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{search_categories, PlaceCategory, POPULAR_CATEGORIES};

pub fn localities(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult {
        localities: catalog.localities().to_vec(),
        ..Default::default()
    })
}

/// Category picker.
///
/// With a query, every category matching it. Without one, the popular
/// categories, or all of them when `all` is set.
pub fn categories(query: Option<&str>, all: bool) -> Result<CmdResult> {
    let categories: Vec<PlaceCategory> = match query {
        Some(q) if !q.trim().is_empty() => search_categories(q),
        _ if all => PlaceCategory::ALL.to_vec(),
        _ => POPULAR_CATEGORIES.to_vec(),
    };

    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("Категории не найдены"));
    }
    result.categories = categories;
    Ok(result)
}
