//! Vote status for a user and bot pair.

use serde::{Deserialize, Serialize};

/// Whether a user has upvoted a bot, and when they can do so again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoteData {
    /// True if the user has an active upvote on the bot.
    voted: bool,

    /// Epoch timestamp of the user's last upvote.
    upvoted_at: i64,

    /// Epoch timestamp at which the user may upvote again.
    #[serde(rename = "next_at")]
    next_upvote_at: i64,
}

impl VoteData {
    /// Returns true if the user has an active upvote on the bot.
    pub fn voted(&self) -> bool {
        self.voted
    }

    /// Returns the epoch timestamp of the user's last upvote.
    pub fn upvoted_at(&self) -> i64 {
        self.upvoted_at
    }

    /// Returns the epoch timestamp at which the user may upvote again.
    pub fn next_upvote_at(&self) -> i64 {
        self.next_upvote_at
    }
}
