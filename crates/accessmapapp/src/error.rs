use crate::wizard::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccessmapError {
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation failed at step \"{step}\": {errors}")]
    Validation { step: String, errors: FieldErrors },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AccessmapError>;
