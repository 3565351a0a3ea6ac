//! InMemoryStore - buffer-backed store for testing and embedding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{decode, encode, LibraryData, LibraryStore, StorageError};
use crate::catalog::Catalog;
use crate::ratings::RatingStore;

/// In-memory store holding the encoded dataset.
///
/// Data goes through the same JSON encoding as the file store. Clone-friendly
/// via Arc: clones share the buffer and the save counter.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    contents: Arc<RwLock<Option<Vec<u8>>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a JSON document.
    pub fn with_contents(json: impl Into<String>) -> Self {
        InMemoryStore {
            contents: Arc::new(RwLock::new(Some(json.into().into_bytes()))),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The last saved document, if any.
    pub fn contents(&self) -> Result<Option<String>, StorageError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(contents
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&self) -> Result<LibraryData, StorageError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        match contents.as_ref() {
            Some(bytes) => decode(bytes),
            None => Ok(LibraryData::default()),
        }
    }

    fn save(&self, books: &Catalog, ratings: &RatingStore) -> Result<(), StorageError> {
        let bytes = encode(books, ratings)?;
        let mut contents = self
            .contents
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        *contents = Some(bytes);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
