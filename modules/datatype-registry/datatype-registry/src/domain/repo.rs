//! Repository trait for datatype storage.

use std::sync::Arc;

use datatype_registry_sdk::DatatypeConstructor;

use super::error::DomainError;

/// Storage interface used by the domain service.
///
/// Entries are keyed by URI and are never removed.
pub trait DatatypeRepository: Send + Sync {
    /// Stores `constructor` under its URI.
    ///
    /// The uniqueness check and the insert happen atomically.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUri` if the URI is already taken; the stored entry
    /// is left untouched.
    fn insert(
        &self,
        constructor: Arc<DatatypeConstructor>,
    ) -> Result<Arc<DatatypeConstructor>, DomainError>;

    /// Returns the constructor stored under `uri`.
    fn get(&self, uri: &str) -> Option<Arc<DatatypeConstructor>>;

    /// Checks if a constructor is stored under `uri`.
    fn exists(&self, uri: &str) -> bool {
        self.get(uri).is_some()
    }

    /// All stored URIs, sorted.
    fn uris(&self) -> Vec<String>;

    /// Number of stored datatypes.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
