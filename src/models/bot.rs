//! A bot listing and its nested description.

use serde::{Deserialize, Serialize};

/// A bot listed on the Listcord directory.
///
/// All fields come verbatim from the API; nothing is normalized or
/// re-validated on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// The bot's ID.
    id: String,

    /// The display name of the listing.
    name: String,

    /// Avatar image URL.
    avatar: String,

    /// Short and long listing descriptions.
    description: BotDescription,

    /// IDs of the developers who maintain the listing.
    developers: Vec<String>,

    /// Permission bitmask the bot requests on invite.
    required_permissions: i64,

    /// Number of upvotes the listing has received.
    upvotes: u32,

    /// Support server invite URL.
    support_server: String,

    /// Website URL.
    website: String,

    /// Tags the listing was filed under.
    tags: Vec<String>,

    /// The bot's command prefix.
    prefix: String,

    /// Submission time of the listing. The API does not fix a schema for
    /// this field, so the raw JSON value is preserved as-is.
    submitted_at: serde_json::Value,

    /// Whether the listing passed review.
    approved: bool,
}

/// The two description lengths attached to a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotDescription {
    /// One-line summary shown on listing cards.
    short: String,

    /// Full description shown on the listing page.
    long: String,
}

impl BotDescription {
    /// Returns the one-line summary shown on listing cards.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Returns the full description shown on the listing page.
    pub fn long(&self) -> &str {
        &self.long
    }
}

impl Bot {
    /// Returns the bot's ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of the listing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar image URL.
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the short and long listing descriptions.
    pub fn description(&self) -> &BotDescription {
        &self.description
    }

    /// Returns the IDs of the developers who maintain the listing.
    pub fn developers(&self) -> &[String] {
        &self.developers
    }

    /// Returns the permission bitmask the bot requests on invite.
    pub fn required_permissions(&self) -> i64 {
        self.required_permissions
    }

    /// Returns the number of upvotes the listing has received.
    pub fn upvotes(&self) -> u32 {
        self.upvotes
    }

    /// Returns the support server invite URL.
    pub fn support_server(&self) -> &str {
        &self.support_server
    }

    /// Returns the website URL.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Returns the tags the listing was filed under.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the bot's command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the raw submission time value, exactly as the API sent it.
    pub fn submitted_at(&self) -> &serde_json::Value {
        &self.submitted_at
    }

    /// Returns whether the listing passed review.
    pub fn approved(&self) -> bool {
        self.approved
    }
}

impl PartialEq for Bot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
