//! Genre-based recommendations.
//!
//! A user's genres are the genres of the catalogued books whose title exactly
//! matches one of the user's rated titles. Every other book in one of those
//! genres is a recommendation. There is no scoring or ranking.

use std::collections::BTreeSet;

use crate::catalog::{Book, Catalog};
use crate::ratings::RatingStore;

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// The user has not rated anything.
    NoRatings,
    /// The user has ratings, but no unrated book shares their genres.
    NoRecommendations,
    /// Unrated books sharing a genre with the user's rated books, in catalog order.
    Books(Vec<Book>),
}

impl Recommendation {
    pub fn books(&self) -> &[Book] {
        match self {
            Recommendation::Books(books) => books,
            _ => &[],
        }
    }

    pub fn into_books(self) -> Vec<Book> {
        match self {
            Recommendation::Books(books) => books,
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

/// Recommend books for `user`.
///
/// Rated titles are matched against the catalog case-sensitively. A book is
/// excluded when its title is among the rated titles, so duplicates of a rated
/// title are never recommended while duplicates of an unrated one all are.
pub fn recommend(user: &str, catalog: &Catalog, ratings: &RatingStore) -> Recommendation {
    let rated = ratings.ratings_for_user(user);
    if rated.is_empty() {
        return Recommendation::NoRatings;
    }

    let genres: BTreeSet<&str> = catalog
        .iter()
        .filter(|book| rated.contains_key(&book.title))
        .map(|book| book.genre.as_str())
        .collect();

    let books: Vec<Book> = catalog
        .iter()
        .filter(|book| genres.contains(book.genre.as_str()) && !rated.contains_key(&book.title))
        .cloned()
        .collect();

    if books.is_empty() {
        Recommendation::NoRecommendations
    } else {
        Recommendation::Books(books)
    }
}
