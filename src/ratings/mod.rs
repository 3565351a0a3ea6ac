//! RatingStore - per-user, per-title ratings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user-supplied score. 1-5 is expected; the store does not enforce it.
pub type Rating = i64;

/// Title -> rating for a single user. Keys are titles exactly as given.
pub type UserRatings = BTreeMap<String, Rating>;

static NO_RATINGS: UserRatings = BTreeMap::new();

/// Two-level mapping `user -> title -> rating`.
///
/// Title keys are case-sensitive and need not name a catalogued book.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingStore {
    users: BTreeMap<String, UserRatings>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the rating `user` gave `title`.
    ///
    /// Returns the previous rating, if any.
    pub fn rate(
        &mut self,
        user: impl Into<String>,
        title: impl Into<String>,
        rating: Rating,
    ) -> Option<Rating> {
        self.users
            .entry(user.into())
            .or_default()
            .insert(title.into(), rating)
    }

    /// Ratings for `user`; empty when the user is unknown.
    pub fn ratings_for_user(&self, user: &str) -> &UserRatings {
        self.users.get(user).unwrap_or(&NO_RATINGS)
    }

    pub fn has_ratings(&self, user: &str) -> bool {
        !self.ratings_for_user(user).is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
