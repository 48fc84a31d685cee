#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # listcord
//!
//! listcord is a convenient wrapper library around the Listcord bot
//! listing's read-only API.
//!
//! This library can fetch:
//! - [`Bot`] listings, individually or through search
//! - [`BotReview`]s left on a listing
//! - [`VoteData`] for a user and bot pair
//!
//! Every call is a single authenticated GET. The client holds no mutable
//! state, so one instance can be shared freely across tasks.
//!
//! ## Example: Printing a bot's command prefix.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use listcord::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-api-token");
//!     let bot = client.get_bot("801093050702233610").await?;
//!     println!("{} responds to {}", bot.name(), bot.prefix());
//!     Ok(())
//! }
//! ```
//!
//! [`Bot`]:       crate::bot::Bot
//! [`BotReview`]: crate::review::BotReview
//! [`VoteData`]:  crate::vote::VoteData

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;


pub use client::Client;
pub use error::Error;
pub use models::bot::{Bot, BotDescription};
pub use models::review::BotReview;
pub use models::vote::VoteData;
pub use models::*;
pub use result::Result;
