//! # Favorites
//!
//! An ordered list of place ids the user starred. [`Favorites`] is the value
//! (a plain snapshot with a functional `toggle`), [`FavoritesStore`] binds a
//! snapshot to a [`KeyValueBackend`] under the `favorites` key.
//!
//! ## Lifecycle
//!
//! 1. **Hydrate** once at startup. An absent, malformed or unreadable value
//!    yields an empty list; the problem is logged, never returned.
//! 2. **Toggle** any number of times. Each toggle replaces the snapshot.
//! 3. **Persist** according to [`PersistMode`]: `Eager` writes through on
//!    every toggle, `OnDrop` writes once when the store goes away. A store
//!    that still holds unwritten changes flushes on drop in either mode.
//!
//! ## Duplicates
//!
//! `toggle` never introduces a duplicate into a duplicate-free list. A list
//! that arrives with duplicates (hand-edited storage, say) is kept as is, and
//! toggling such an id removes every occurrence.

use crate::error::Result;
use crate::store::{KeyValueBackend, FAVORITES_KEY};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<String>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every occurrence of `id` if present, else append it.
    pub fn toggle(&self, id: &str) -> Favorites {
        if self.contains(id) {
            Favorites(self.0.iter().filter(|fav| *fav != id).cloned().collect())
        } else {
            let mut next = self.0.clone();
            next.push(id.to_string());
            Favorites(next)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|fav| fav == id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Favorites {
    fn from(ids: Vec<String>) -> Self {
        Favorites(ids)
    }
}

/// When favorites changes reach storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistMode {
    /// Write on every toggle.
    #[default]
    Eager,
    /// Write once, when the store is dropped.
    OnDrop,
}

pub struct FavoritesStore<B: KeyValueBackend> {
    backend: Rc<B>,
    mode: PersistMode,
    current: Favorites,
    dirty: bool,
}

impl<B: KeyValueBackend> FavoritesStore<B> {
    /// Load the persisted list. Never fails.
    pub fn hydrate(backend: Rc<B>, mode: PersistMode) -> Self {
        let current = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Favorites>(&raw) {
                Ok(favorites) => favorites,
                Err(err) => {
                    tracing::warn!(error = %err, "malformed favorites in storage, starting empty");
                    Favorites::default()
                }
            },
            Ok(None) => Favorites::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read favorites, starting empty");
                Favorites::default()
            }
        };
        tracing::debug!(count = current.len(), ?mode, "favorites hydrated");

        Self {
            backend,
            mode,
            current,
            dirty: false,
        }
    }

    pub fn current(&self) -> &Favorites {
        &self.current
    }

    pub fn mode(&self) -> PersistMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Toggle `id` and return the new snapshot.
    ///
    /// In eager mode a failed write is returned as an error, but the
    /// in-memory list has already changed and stays dirty, so the drop flush
    /// retries it.
    pub fn toggle(&mut self, id: &str) -> Result<Favorites> {
        self.current = self.current.toggle(id);
        self.dirty = true;
        if self.mode == PersistMode::Eager {
            self.persist()?;
        }
        Ok(self.current.clone())
    }

    /// Write the current list to storage.
    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.current)?;
        self.backend.set(FAVORITES_KEY, &raw)?;
        self.dirty = false;
        tracing::debug!(count = self.current.len(), "favorites persisted");
        Ok(())
    }
}

impl<B: KeyValueBackend> Drop for FavoritesStore<B> {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(err) = self.persist() {
                tracing::warn!(error = %err, "failed to flush favorites on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    fn favs(ids: &[&str]) -> Favorites {
        Favorites::from(ids.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn has_duplicates(f: &Favorites) -> bool {
        let mut seen = std::collections::HashSet::new();
        f.iter().any(|id| !seen.insert(id))
    }

    #[test]
    fn toggle_removes_then_appends() {
        let start = favs(&["p1", "p2"]);
        let removed = start.toggle("p1");
        assert_eq!(removed, favs(&["p2"]));
        assert_eq!(removed.toggle("p3"), favs(&["p2", "p3"]));
        // previous snapshot untouched
        assert_eq!(start, favs(&["p1", "p2"]));
    }

    #[test]
    fn toggle_is_self_inverse_for_absent_ids() {
        let start = favs(&["a", "b", "c"]);
        for id in ["x", "y", ""] {
            assert_eq!(start.toggle(id).toggle(id), start);
        }
    }

    #[test]
    fn toggle_never_creates_duplicates() {
        let mut current = Favorites::new();
        for id in ["a", "b", "a", "c", "b", "b", "a", "d"] {
            current = current.toggle(id);
            assert!(!has_duplicates(&current));
        }
    }

    #[test]
    fn toggle_removes_every_occurrence_from_corrupt_input() {
        let corrupt = favs(&["a", "b", "a", "c", "a"]);
        assert_eq!(corrupt.toggle("a"), favs(&["b", "c"]));
    }

    #[test]
    fn hydrate_reads_stored_list() {
        let backend = Rc::new(MemBackend::new().with_value(FAVORITES_KEY, r#"["7","1"]"#));
        let store = FavoritesStore::hydrate(backend, PersistMode::Eager);
        assert_eq!(store.current(), &favs(&["7", "1"]));
        assert!(!store.is_dirty());
    }

    #[test]
    fn hydrate_recovers_from_bad_values() {
        for raw in ["not json", "{\"a\":1}", "[1,2]", "null", ""] {
            let backend = Rc::new(MemBackend::new().with_value(FAVORITES_KEY, raw));
            let store = FavoritesStore::hydrate(backend, PersistMode::Eager);
            assert!(store.current().is_empty(), "input {raw:?}");
        }
    }

    #[test]
    fn hydrate_recovers_from_read_errors() {
        let backend = MemBackend::new().with_value(FAVORITES_KEY, r#"["1"]"#);
        backend.set_simulate_read_error(true);
        let store = FavoritesStore::hydrate(Rc::new(backend), PersistMode::Eager);
        assert!(store.current().is_empty());
    }

    #[test]
    fn eager_mode_writes_every_toggle() {
        let backend = Rc::new(MemBackend::new());
        let mut store = FavoritesStore::hydrate(backend.clone(), PersistMode::Eager);

        store.toggle("1").unwrap();
        assert_eq!(backend.raw(FAVORITES_KEY).as_deref(), Some(r#"["1"]"#));
        store.toggle("2").unwrap();
        assert_eq!(backend.raw(FAVORITES_KEY).as_deref(), Some(r#"["1","2"]"#));
        assert_eq!(backend.write_count(), 2);

        drop(store);
        assert_eq!(backend.write_count(), 2);
    }

    #[test]
    fn on_drop_mode_writes_once() {
        let backend = Rc::new(MemBackend::new());
        let mut store = FavoritesStore::hydrate(backend.clone(), PersistMode::OnDrop);

        store.toggle("1").unwrap();
        store.toggle("2").unwrap();
        store.toggle("1").unwrap();
        assert_eq!(backend.write_count(), 0);

        drop(store);
        assert_eq!(backend.write_count(), 1);
        assert_eq!(backend.raw(FAVORITES_KEY).as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn untouched_store_does_not_write_on_drop() {
        let backend = Rc::new(MemBackend::new().with_value(FAVORITES_KEY, "garbage"));
        drop(FavoritesStore::hydrate(backend.clone(), PersistMode::OnDrop));
        assert_eq!(backend.write_count(), 0);
        assert_eq!(backend.raw(FAVORITES_KEY).as_deref(), Some("garbage"));
    }

    #[test]
    fn eager_write_failure_is_reported_and_retried_on_drop() {
        let backend = Rc::new(MemBackend::new());
        let mut store = FavoritesStore::hydrate(backend.clone(), PersistMode::Eager);

        backend.set_simulate_write_error(true);
        assert!(store.toggle("5").is_err());
        assert!(store.current().contains("5"));
        assert!(store.is_dirty());

        backend.set_simulate_write_error(false);
        drop(store);
        assert_eq!(backend.raw(FAVORITES_KEY).as_deref(), Some(r#"["5"]"#));
    }
}
