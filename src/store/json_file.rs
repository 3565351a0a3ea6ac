//! JsonFileStore - the dataset as a single JSON document on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{decode, encode, LibraryData, LibraryStore, StorageError};
use crate::catalog::Catalog;
use crate::ratings::RatingStore;

/// Flat-file store. Every save rewrites the whole file.
///
/// Writers are not coordinated; two processes saving to the same path will
/// overwrite each other.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: io::Error) -> StorageError {
        StorageError::Io(format!("{}: {}", self.path.display(), err))
    }
}

impl LibraryStore for JsonFileStore {
    fn load(&self) -> Result<LibraryData, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let data = decode(&bytes)?;
                debug!(
                    path = %self.path.display(),
                    books = data.books.len(),
                    "loaded library file"
                );
                Ok(data)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no library file yet, starting empty");
                Ok(LibraryData::default())
            }
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&self, books: &Catalog, ratings: &RatingStore) -> Result<(), StorageError> {
        let bytes = encode(books, ratings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        fs::write(&self.path, bytes).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), books = books.len(), "saved library file");
        Ok(())
    }
}
