//! Catalog - the ordered list of books, source of truth for book metadata.

mod book;

pub use book::Book;

use serde::{Deserialize, Serialize};

/// Books in insertion order.
///
/// Positions are exposed to users as 1-based display numbers. Duplicate titles
/// are allowed and listed independently.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book and return a reference to the stored record.
    ///
    /// The catalog does not touch the title index; the owner keeps both in step.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> &Book {
        self.push(Book::new(title, author, genre))
    }

    pub fn push(&mut self, book: Book) -> &Book {
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// First book whose title equals `title` ignoring case.
    pub fn find_by_title_case_insensitive(&self, title: &str) -> Option<&Book> {
        let wanted = title.to_lowercase();
        self.books
            .iter()
            .find(|book| book.title.to_lowercase() == wanted)
    }

    /// Resolve a 1-based display number.
    pub fn get_by_number(&self, number: usize) -> Option<&Book> {
        number.checked_sub(1).and_then(|idx| self.books.get(idx))
    }

    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|book| book.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Catalog { books }
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Catalog {
            books: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
