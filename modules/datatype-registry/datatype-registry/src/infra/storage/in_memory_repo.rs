//! In-memory repository implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use datatype_registry_sdk::DatatypeConstructor;
use parking_lot::RwLock;

use crate::domain::error::DomainError;
use crate::domain::repo::DatatypeRepository;

/// In-memory repository for registered datatypes.
///
/// Registration takes the write lock for the duplicate check and the
/// insert together; lookups share the read lock.
#[derive(Default)]
pub struct InMemoryDatatypeRepository {
    datatypes: RwLock<HashMap<String, Arc<DatatypeConstructor>>>,
}

impl InMemoryDatatypeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatatypeRepository for InMemoryDatatypeRepository {
    fn insert(
        &self,
        constructor: Arc<DatatypeConstructor>,
    ) -> Result<Arc<DatatypeConstructor>, DomainError> {
        let mut datatypes = self.datatypes.write();

        match datatypes.entry(constructor.uri().to_owned()) {
            Entry::Occupied(existing) => Err(DomainError::duplicate_uri(existing.key())),
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&constructor));
                Ok(constructor)
            }
        }
    }

    fn get(&self, uri: &str) -> Option<Arc<DatatypeConstructor>> {
        self.datatypes.read().get(uri).cloned()
    }

    fn exists(&self, uri: &str) -> bool {
        self.datatypes.read().contains_key(uri)
    }

    fn uris(&self) -> Vec<String> {
        let mut uris: Vec<String> = self.datatypes.read().keys().cloned().collect();
        uris.sort_unstable();
        uris
    }

    fn len(&self) -> usize {
        self.datatypes.read().len()
    }
}
