use std::fmt;

use crate::store::StorageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    Storage(StorageError),
    BookNumberOutOfRange { number: usize, len: usize },
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage(err) => write!(f, "{}", err),
            LibraryError::BookNumberOutOfRange { number, len } => write!(
                f,
                "invalid book number {} (catalog has {} books)",
                number, len
            ),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Storage(err) => Some(err),
            LibraryError::BookNumberOutOfRange { .. } => None,
        }
    }
}

impl From<StorageError> for LibraryError {
    fn from(err: StorageError) -> Self {
        LibraryError::Storage(err)
    }
}
