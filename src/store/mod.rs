//! Storage - the load/save boundary for the whole dataset.
//!
//! The catalog and ratings are read wholesale at startup and written back in
//! full after every mutation. There is no incremental write path.
//!
//! ## Example
//!
//! ```
//! use bookshelf::{Catalog, InMemoryStore, LibraryStore, RatingStore};
//!
//! let store = InMemoryStore::new();
//! assert!(store.load().unwrap().books.is_empty());
//!
//! let mut books = Catalog::new();
//! books.add("Dune", "Herbert", "SciFi");
//! store.save(&books, &RatingStore::new()).unwrap();
//!
//! assert_eq!(store.load().unwrap().books.len(), 1);
//! ```

mod in_memory;
mod json_file;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Catalog;
use crate::ratings::RatingStore;

/// Everything that is persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryData {
    #[serde(default)]
    pub books: Catalog,
    #[serde(default)]
    pub ratings: RatingStore,
}

#[derive(Serialize)]
struct LibraryDataRef<'a> {
    books: &'a Catalog,
    ratings: &'a RatingStore,
}

/// Abstract whole-dataset storage.
pub trait LibraryStore {
    /// Read the full dataset. A store with no prior state returns empty data.
    fn load(&self) -> Result<LibraryData, StorageError>;

    /// Overwrite the stored dataset with `books` and `ratings`.
    fn save(&self, books: &Catalog, ratings: &RatingStore) -> Result<(), StorageError>;
}

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    Io(String),
    /// The stored data could not be encoded or decoded.
    Serde(String),
    /// A shared in-memory buffer was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "storage io error: {}", msg),
            StorageError::Serde(msg) => write!(f, "storage serialization error: {}", msg),
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}

/// Encode the dataset as pretty JSON with a four-space indent.
pub(crate) fn encode(books: &Catalog, ratings: &RatingStore) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    LibraryDataRef { books, ratings }.serialize(&mut serializer)?;
    Ok(buf)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<LibraryData, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
