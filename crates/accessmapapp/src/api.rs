//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all accessmap operations, regardless of the UI in front
//! of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the catalog reference and the two persistent stores
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Own the selection state**: [`AppState`] belongs to the client, which
//!   passes the current snapshot into view methods
//! - **Presentation**: returns data structures, not strings
//!
//! ## Generic Over the Backend
//!
//! `AccessmapApi<B: KeyValueBackend, T: ScaleTarget>`:
//! - Production: `AccessmapApi<FsBackend, _>`
//! - Testing: `AccessmapApi<MemBackend>`
//!
//! Both stores share one backend through an `Rc`.
//!
//! ## Lifetime
//!
//! Dropping the API drops the stores: pending favorites are flushed and the
//! scale target is cleared. A client should keep the API alive for as long
//! as its UI is up.

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::favorites::{Favorites, FavoritesStore, PersistMode};
use crate::preferences::{NoopTarget, ScaleTarget, TextScaleStore};
use crate::state::AppState;
use crate::store::KeyValueBackend;
use crate::wizard::FieldValues;
use std::rc::Rc;

pub use crate::commands::scale::ScaleAction;

pub struct AccessmapApi<B: KeyValueBackend, T: ScaleTarget = NoopTarget> {
    catalog: &'static Catalog,
    favorites: FavoritesStore<B>,
    text_scale: TextScaleStore<B, T>,
}

impl<B: KeyValueBackend, T: ScaleTarget> AccessmapApi<B, T> {
    /// Hydrate both stores from `backend`.
    pub fn new(backend: B, catalog: &'static Catalog, mode: PersistMode, target: T) -> Self {
        let backend = Rc::new(backend);
        Self {
            catalog,
            favorites: FavoritesStore::hydrate(Rc::clone(&backend), mode),
            text_scale: TextScaleStore::hydrate(backend, target),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn favorites(&self) -> &Favorites {
        self.favorites.current()
    }

    pub fn scale_target(&self) -> &T {
        self.text_scale.target()
    }

    /// Initial selection state: the given locality and the hydrated favorites.
    pub fn initial_state(&self, locality: &str) -> AppState {
        AppState::new(locality).with_favorites(self.favorites().clone())
    }

    pub fn list_places(&self, state: &AppState) -> Result<CmdResult> {
        commands::list::run(self.catalog, state)
    }

    pub fn list_favorites(&self, state: &AppState) -> Result<CmdResult> {
        commands::list::favorites(self.catalog, state)
    }

    pub fn view_place(&self, place_id: &str) -> Result<CmdResult> {
        commands::detail::run(self.catalog, self.favorites(), place_id)
    }

    pub fn toggle_favorite(&mut self, place_id: &str) -> Result<CmdResult> {
        commands::favorites::toggle(self.catalog, &mut self.favorites, place_id)
    }

    /// Write pending favorites now instead of waiting for drop.
    pub fn flush_favorites(&mut self) -> Result<()> {
        if self.favorites.is_dirty() {
            self.favorites.persist()?;
        }
        Ok(())
    }

    pub fn localities(&self) -> Result<CmdResult> {
        commands::lookup::localities(self.catalog)
    }

    pub fn categories(&self, query: Option<&str>, all: bool) -> Result<CmdResult> {
        commands::lookup::categories(query, all)
    }

    pub fn text_scale(&mut self, action: ScaleAction) -> Result<CmdResult> {
        commands::scale::run(&mut self.text_scale, action)
    }

    pub fn add_place(&self, values: &FieldValues) -> Result<CmdResult> {
        commands::submit::add_place(values)
    }

    pub fn rate_place(&self, place_id: &str, values: &FieldValues) -> Result<CmdResult> {
        commands::submit::rate_place(self.catalog, place_id, values)
    }
}
