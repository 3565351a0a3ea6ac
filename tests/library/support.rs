use bookshelf::{Library, LibraryStore};

pub const SAMPLE: &[(&str, &str, &str)] = &[
    ("Dune", "Herbert", "SciFi"),
    ("Foundation", "Asimov", "SciFi"),
    ("Emma", "Austen", "Romance"),
];

pub fn seed<S: LibraryStore>(library: &mut Library<S>) {
    for (title, author, genre) in SAMPLE {
        library.add_book(*title, *author, *genre).unwrap();
    }
}
