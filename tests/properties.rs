//! Property tests for the title index and the recommender.

use std::collections::BTreeSet;

use bookshelf::{recommend, Book, Catalog, RatingStore, Recommendation, TitleIndex};
use proptest::prelude::*;

fn title_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..20)
}

fn book_lists() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(
        (
            "[A-Da-d]{1,4}",
            "[a-z]{1,6}",
            prop::sample::select(vec!["SciFi", "Romance", "Poetry", "Crime"]),
        ),
        0..15,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(title, author, genre)| Book::new(title, author, genre))
            .collect()
    })
}

proptest! {
    #[test]
    fn empty_prefix_returns_all_lowercased_titles(titles in title_lists()) {
        let index = TitleIndex::from_titles(&titles);
        let expected: BTreeSet<String> = titles.iter().map(|t| t.to_lowercase()).collect();
        let found = index.search("");

        prop_assert_eq!(found.len(), expected.len());
        prop_assert_eq!(found.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn every_true_prefix_finds_its_title(titles in title_lists(), cut in 0usize..13) {
        let index = TitleIndex::from_titles(&titles);
        for title in &titles {
            let lowered = title.to_lowercase();
            let prefix: String = title.chars().take(cut).collect();
            prop_assert!(index.search(&prefix).contains(&lowered));
        }
    }

    #[test]
    fn search_returns_only_matching_titles(titles in title_lists(), prefix in "[a-zA-Z]{0,3}") {
        let index = TitleIndex::from_titles(&titles);
        let lowered_prefix = prefix.to_lowercase();
        let any_match = titles.iter().any(|t| t.to_lowercase().starts_with(&lowered_prefix));

        let found = index.search(&prefix);
        prop_assert_eq!(found.is_empty(), !any_match);
        for hit in &found {
            prop_assert!(hit.starts_with(&lowered_prefix));
        }
    }

    #[test]
    fn search_results_are_sorted(titles in title_lists(), prefix in "[a-z]{0,2}") {
        let found = TitleIndex::from_titles(&titles).search(&prefix);
        let mut sorted = found.clone();
        sorted.sort();
        prop_assert_eq!(found, sorted);
    }

    #[test]
    fn recommendations_exclude_rated_and_share_a_genre(
        books in book_lists(),
        picks in prop::collection::vec(0usize..15, 0..5),
    ) {
        let catalog: Catalog = books.into_iter().collect();
        let mut ratings = RatingStore::new();
        for pick in picks {
            if let Some(book) = catalog.get_by_number(pick + 1) {
                ratings.rate("user", book.title.clone(), 3);
            }
        }

        let rated = ratings.ratings_for_user("user");
        let rated_genres: BTreeSet<&str> = catalog
            .iter()
            .filter(|b| rated.contains_key(&b.title))
            .map(|b| b.genre.as_str())
            .collect();

        match recommend("user", &catalog, &ratings) {
            Recommendation::NoRatings => prop_assert!(rated.is_empty()),
            Recommendation::NoRecommendations => prop_assert!(!rated.is_empty()),
            Recommendation::Books(found) => {
                prop_assert!(!found.is_empty());
                for book in &found {
                    prop_assert!(!rated.contains_key(&book.title));
                    prop_assert!(rated_genres.contains(book.genre.as_str()));
                }
            }
        }
    }
}
