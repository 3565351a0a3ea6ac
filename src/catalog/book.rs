use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalogued book. Identity is the title, which is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Genre: {}",
            self.title, self.author, self.genre
        )
    }
}
