use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "where" of persistence (file vs memory), while the
/// favorites and preference stores handle the "what" (encoding, validation,
/// recovery). All methods take `&self`; implementations use interior
/// mutability since accessmap is single-threaded.
pub trait KeyValueBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the key is absent.
    /// Returns Err only when the storage itself cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
