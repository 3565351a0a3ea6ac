//! End-to-end tests of a library backed by a JSON file.

mod support;

use std::fs;
use std::path::Path;

use bookshelf::{
    Book, JsonFileStore, Library, LibraryError, LibraryStore, Recommendation, SearchOutcome,
    StorageError,
};
use support::seed;

fn open(path: &Path) -> Library<JsonFileStore> {
    Library::open(JsonFileStore::new(path)).unwrap()
}

#[test]
fn fresh_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let library = open(&dir.path().join("books.json"));
    assert!(library.books().is_empty());
    assert!(library.index().is_empty());
    assert_eq!(library.search(""), SearchOutcome::NoMatches);
}

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    {
        let mut library = open(&path);
        seed(&mut library);
        library.rate_book("alice", "Dune", 5).unwrap();
    }

    let library = open(&path);
    assert_eq!(library.books().len(), 3);
    assert_eq!(library.ratings().ratings_for_user("alice")["Dune"], 5);
    assert_eq!(library.index().search("du"), vec!["dune"]);
    assert_eq!(
        library.recommend("alice"),
        Recommendation::Books(vec![Book::new("Foundation", "Asimov", "SciFi")])
    );
    assert_eq!(library.recommend("bob"), Recommendation::NoRatings);
}

#[test]
fn every_mutation_rewrites_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    let mut library = open(&path);

    library.add_book("Dune", "Herbert", "SciFi").unwrap();
    let after_add = fs::read_to_string(&path).unwrap();
    assert!(after_add.contains("\"Dune\""));

    library.rate_book("alice", "Dune", 4).unwrap();
    let after_rate = fs::read_to_string(&path).unwrap();
    assert!(after_rate.contains("\"alice\""));
}

#[test]
fn reads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(
        &path,
        r#"{
    "books": [
        {"title": "Dune", "author": "Herbert", "genre": "SciFi"},
        {"title": "Dune Messiah", "author": "Herbert", "genre": "SciFi"},
        {"title": "Emma", "author": "Austen", "genre": "Romance"}
    ],
    "ratings": {"carol": {"Emma": 2}}
}"#,
    )
    .unwrap();

    let library = open(&path);
    assert_eq!(library.index().search("du"), vec!["dune", "dune messiah"]);
    assert_eq!(library.index().search("e"), vec!["emma"]);
    assert!(library.index().search("z").is_empty());
    assert_eq!(library.recommend("carol"), Recommendation::NoRecommendations);
}

#[test]
fn index_self_heals_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    let mut library = open(&path);
    seed(&mut library);

    // Another writer appends a book behind this handle's back.
    let store = JsonFileStore::new(&path);
    let mut data = store.load().unwrap();
    data.books.add("Hyperion", "Simmons", "SciFi");
    store.save(&data.books, &data.ratings).unwrap();

    assert_eq!(library.search("hyp"), SearchOutcome::NoMatches);
    library.reload().unwrap();
    assert_eq!(library.search("hyp").books()[0].author, "Simmons");
}

#[test]
fn unwritable_location_fails_the_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    let mut library = open(&path);

    // A directory now sits where the data file should be written.
    fs::create_dir(&path).unwrap();
    let err = library.add_book("Dune", "Herbert", "SciFi").unwrap_err();
    assert!(matches!(err, LibraryError::Storage(StorageError::Io(_))));
}

#[test]
fn corrupt_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, "not json").unwrap();

    let err = Library::open(JsonFileStore::new(&path)).err().unwrap();
    assert!(matches!(err, LibraryError::Storage(StorageError::Serde(_))));
}
