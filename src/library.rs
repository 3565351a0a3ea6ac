//! Library - the handle owning the catalog, ratings, title index and store.

use tracing::{debug, info, warn};

use crate::catalog::{Book, Catalog};
use crate::error::LibraryError;
use crate::ratings::{Rating, RatingStore};
use crate::recommend::{recommend, Recommendation};
use crate::store::LibraryStore;
use crate::title_index::TitleIndex;

/// Outcome of a title prefix search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No indexed title starts with the prefix.
    NoMatches,
    /// One catalogued book per matching title, in index order.
    Matches(Vec<Book>),
}

impl SearchOutcome {
    pub fn books(&self) -> &[Book] {
        match self {
            SearchOutcome::Matches(books) => books,
            SearchOutcome::NoMatches => &[],
        }
    }
}

/// A loaded library bound to its store.
///
/// Every mutating operation writes the full dataset back through the store
/// before returning. If the write fails the in-memory change is kept and the
/// error is returned.
pub struct Library<S: LibraryStore> {
    store: S,
    catalog: Catalog,
    ratings: RatingStore,
    index: TitleIndex,
}

impl<S: LibraryStore> Library<S> {
    /// Load the dataset from `store` and build the title index.
    pub fn open(store: S) -> Result<Self, LibraryError> {
        let data = store.load()?;
        let index = TitleIndex::from_titles(data.books.titles());
        debug!(
            books = data.books.len(),
            titles = index.len(),
            "opened library"
        );
        Ok(Library {
            store,
            catalog: data.books,
            ratings: data.ratings,
            index,
        })
    }

    /// Discard in-memory state and re-read it from the store.
    pub fn reload(&mut self) -> Result<(), LibraryError> {
        let data = self.store.load()?;
        self.index = TitleIndex::from_titles(data.books.titles());
        self.catalog = data.books;
        self.ratings = data.ratings;
        debug!(books = self.catalog.len(), "reloaded library");
        Ok(())
    }

    /// Append a book, index its title and persist.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<&Book, LibraryError> {
        let book = Book::new(title, author, genre);
        self.index.insert(&book.title);
        info!(title = %book.title, genre = %book.genre, "adding book");
        self.catalog.push(book);
        self.persist()?;
        let last = self.catalog.len();
        Ok(&self.catalog.list()[last - 1])
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.list()
    }

    /// Record `user`'s rating for the literal `title` and persist.
    ///
    /// The title need not be catalogued and the rating is not range-checked.
    pub fn rate_book(
        &mut self,
        user: &str,
        title: &str,
        rating: Rating,
    ) -> Result<(), LibraryError> {
        self.ratings.rate(user, title, rating);
        info!(user, title, rating, "rated book");
        self.persist()
    }

    /// Rate the book at 1-based display position `number`.
    pub fn rate_book_number(
        &mut self,
        user: &str,
        number: usize,
        rating: Rating,
    ) -> Result<&Book, LibraryError> {
        let title = match self.catalog.get_by_number(number) {
            Some(book) => book.title.clone(),
            None => {
                return Err(LibraryError::BookNumberOutOfRange {
                    number,
                    len: self.catalog.len(),
                })
            }
        };
        self.rate_book(user, &title, rating)?;
        Ok(&self.catalog.list()[number - 1])
    }

    pub fn recommend(&self, user: &str) -> Recommendation {
        let result = recommend(user, &self.catalog, &self.ratings);
        debug!(user, found = result.books().len(), "computed recommendations");
        result
    }

    /// Find catalogued books whose title starts with `prefix`, ignoring case.
    ///
    /// Each index hit is resolved to the first book with that title. Hits with
    /// no catalogued book are skipped.
    pub fn search(&self, prefix: &str) -> SearchOutcome {
        let hits = self.index.search(prefix);
        if hits.is_empty() {
            debug!(prefix, "no titles match prefix");
            return SearchOutcome::NoMatches;
        }

        let mut books = Vec::with_capacity(hits.len());
        for hit in &hits {
            match self.catalog.find_by_title_case_insensitive(hit) {
                Some(book) => books.push(book.clone()),
                None => warn!(title = %hit, "indexed title has no catalog record"),
            }
        }
        debug!(prefix, hits = hits.len(), resolved = books.len(), "searched titles");
        SearchOutcome::Matches(books)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> Result<(), LibraryError> {
        self.store.save(&self.catalog, &self.ratings)?;
        Ok(())
    }
}
