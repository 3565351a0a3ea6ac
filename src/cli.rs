//! Command-line interface.
//!
//! ## Commands
//!
//! - `bookshelf add <TITLE> <AUTHOR> <GENRE>` - add a book
//! - `bookshelf list` - list books with their display numbers
//! - `bookshelf rate <USER> <NUMBER> <RATING>` - rate a book by number
//! - `bookshelf recommend <USER>` - genre-based recommendations
//! - `bookshelf search <PREFIX>` - case-insensitive title prefix search
//!
//! ## Configuration
//!
//! - `BOOKSHELF_DATA` - path of the JSON data file (default: `books.json`)

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::library::{Library, SearchOutcome};
use crate::ratings::Rating;
use crate::recommend::Recommendation;
use crate::store::{JsonFileStore, LibraryStore};

/// Catalog books, rate them, search titles and get recommendations.
#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the JSON data file.
    #[arg(long, env = "BOOKSHELF_DATA", default_value = "books.json")]
    pub data: PathBuf,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    pub fn config(&self) -> Config {
        Config {
            data_path: self.data.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a book to the catalog.
    Add {
        title: String,
        author: String,
        genre: String,
    },
    /// List every book with its number.
    List,
    /// Rate a book by its number in `list`.
    Rate {
        user: String,
        number: usize,
        /// Rating from 1 to 5.
        #[arg(value_parser = clap::value_parser!(i64).range(1..=5))]
        rating: Rating,
    },
    /// Recommend unrated books sharing a genre with the user's rated books.
    Recommend { user: String },
    /// Search titles by prefix, ignoring case.
    Search { prefix: String },
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Config {
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_path)
    }
}

/// Execute `command` against `library`, writing user-facing output to `out`.
pub fn execute<S, W>(command: Commands, library: &mut Library<S>, out: &mut W) -> Result<()>
where
    S: LibraryStore,
    W: Write,
{
    match command {
        Commands::Add {
            title,
            author,
            genre,
        } => {
            let book = library
                .add_book(title, author, genre)
                .context("failed to save new book")?;
            writeln!(out, "Book '{}' added successfully.", book.title)?;
        }
        Commands::List => {
            if library.books().is_empty() {
                writeln!(out, "No books available.")?;
            }
            for (idx, book) in library.books().iter().enumerate() {
                writeln!(out, "{}. {}", idx + 1, book)?;
            }
        }
        Commands::Rate {
            user,
            number,
            rating,
        } => {
            let book = library.rate_book_number(&user, number, rating)?;
            writeln!(out, "Rating for '{}' saved successfully.", book.title)?;
        }
        Commands::Recommend { user } => match library.recommend(&user) {
            Recommendation::NoRatings => writeln!(out, "No ratings found for user.")?,
            Recommendation::NoRecommendations => writeln!(out, "No recommendations available.")?,
            Recommendation::Books(books) => {
                for book in books {
                    writeln!(out, "{}", book)?;
                }
            }
        },
        Commands::Search { prefix } => match library.search(&prefix) {
            SearchOutcome::NoMatches => writeln!(out, "No books found with that prefix.")?,
            SearchOutcome::Matches(books) => {
                for book in books {
                    writeln!(out, "{}", book)?;
                }
            }
        },
    }
    Ok(())
}
