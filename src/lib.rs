//! # bookshelf
//!
//! A small book catalog with case-insensitive title prefix search and
//! genre-based recommendations, persisted as a single JSON document.
//!
//! ```
//! use bookshelf::{InMemoryStore, Library, Recommendation};
//!
//! let mut library = Library::open(InMemoryStore::new()).unwrap();
//! library.add_book("Dune", "Herbert", "SciFi").unwrap();
//! library.add_book("Foundation", "Asimov", "SciFi").unwrap();
//! library.rate_book("alice", "Dune", 5).unwrap();
//!
//! let picks = library.recommend("alice");
//! assert_eq!(picks.books()[0].title, "Foundation");
//! assert_eq!(library.recommend("bob"), Recommendation::NoRatings);
//! ```

mod catalog;
pub mod cli;
mod error;
mod library;
mod ratings;
mod recommend;
mod store;
mod title_index;

pub use catalog::{Book, Catalog};
pub use error::LibraryError;
pub use library::{Library, SearchOutcome};
pub use ratings::{Rating, RatingStore, UserRatings};
pub use recommend::{recommend, Recommendation};
pub use store::{InMemoryStore, JsonFileStore, LibraryData, LibraryStore, StorageError};
pub use title_index::{TitleIndex, TrieNode};
