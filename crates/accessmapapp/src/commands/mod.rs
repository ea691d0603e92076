//! # Command Layer
//!
//! This module contains the **core business logic** of accessmap. Each
//! command lives in its own submodule and implements plain functions over the
//! catalog, the application state and the stores.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Run the filter engine, look up places and comments, drive the wizards
//! - Mutate the favorites and text scale stores
//! - Return a structured [`CmdResult`] with listed places, details and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** besides the injected storage backend: no stdout, no formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Empty Results
//!
//! A filter that matches nothing is a valid answer, not an error. List
//! commands then return an empty `listed_places` together with an info
//! message, so a client can tell "nothing matched" from "nothing asked".
//!
//! ## Command Modules
//!
//! - [`list`]: listing view and favorites view
//! - [`detail`]: one place with its comments
//! - [`favorites`]: toggle a favorite
//! - [`lookup`]: localities and categories
//! - [`scale`]: text scale controls
//! - [`submit`]: run the add-place and rate-place wizards to completion

use crate::model::{Comment, Locality, Place, PlaceCategory, RatingSummary};
use crate::preferences::TextScale;
use crate::wizard::add_place::PlaceSubmission;
use crate::wizard::rate_place::RatingSubmission;
use serde::Serialize;

pub mod detail;
pub mod favorites;
pub mod list;
pub mod lookup;
pub mod scale;
pub mod submit;

pub const EMPTY_PLACES_MESSAGE: &str = "Нет мест для отображения";
pub const EMPTY_COMMENTS_MESSAGE: &str = "Пока нет комментариев";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A place as shown in a list: the record plus per-user state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedPlace {
    pub place: Place,
    pub is_favorite: bool,
    #[serde(skip)]
    pub rating: RatingSummary,
}

impl ListedPlace {
    pub fn new(place: &Place, is_favorite: bool) -> Self {
        Self {
            place: place.clone(),
            is_favorite,
            rating: place.rating.summary(),
        }
    }
}

/// Everything the detail view shows for one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetail {
    pub place: ListedPlace,
    pub locality: Option<Locality>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleStatus {
    pub scale: TextScale,
    pub can_increase: bool,
    pub can_decrease: bool,
    pub can_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Receipt {
    Place(PlaceSubmission),
    Rating(RatingSubmission),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_places: Vec<ListedPlace>,
    pub detail: Option<PlaceDetail>,
    pub localities: Vec<Locality>,
    pub categories: Vec<PlaceCategory>,
    pub text_scale: Option<ScaleStatus>,
    pub receipt: Option<Receipt>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_places(mut self, places: Vec<ListedPlace>) -> Self {
        self.listed_places = places;
        self
    }

    pub fn with_detail(mut self, detail: PlaceDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_text_scale(mut self, status: ScaleStatus) -> Self {
        self.text_scale = Some(status);
        self
    }

    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }
}
