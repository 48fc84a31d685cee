//! A user-submitted review of a listing.

use serde::{Deserialize, Serialize};

/// A review left on a bot listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReview {
    /// ID of the user who wrote the review.
    author_id: String,

    /// Star rating given by the reviewer.
    stars: u32,

    /// Free-text body of the review.
    content: String,

    /// Epoch timestamp of when the review was sent. The API does not
    /// document whether the unit is seconds or milliseconds.
    sent_at: i64,
}

impl BotReview {
    /// Returns the ID of the user who wrote the review.
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// Returns the star rating given by the reviewer.
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Returns the free-text body of the review.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the epoch timestamp of when the review was sent.
    pub fn sent_at(&self) -> i64 {
        self.sent_at
    }
}
