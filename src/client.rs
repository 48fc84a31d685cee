use crate::{
    error::Error,
    models::{bot::Bot, review::BotReview, vote::VoteData},
    result::Result,
};
use reqwest::{header::USER_AGENT, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://listcord.xyz/api";
const CLIENT_AGENT: &str = concat!("listcord-rs/", env!("CARGO_PKG_VERSION"));

/// Asynchronous client for the Listcord REST API.
///
/// Holds the API token and an HTTP transport that is reused across
/// calls. The client is immutable after construction and cheap to clone.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    token: String,
    base_url: String,
}

/// A relative path plus the query pairs to append to it.
#[derive(Debug)]
pub(crate) struct FetchRequest<'a> {
    pub(crate) path: String,
    pub(crate) query: &'a [(&'a str, &'a str)],
}

impl Client {
    /// Constructs a client bound to the production API root.
    ///
    /// The token is not validated here; a bad token only surfaces as
    /// [`Error::InvalidToken`] once a request is made.
    pub fn new(token: impl Into<String>) -> Client {
        Self::with_base_url(token, BASE_URL)
    }

    /// Constructs a client against a different API root.
    ///
    /// Useful for proxies and for tests running against a local mock server.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Client {
        Client {
            http: ReqwestClient::new(),
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn fetch_json<T>(&self, request: FetchRequest<'_>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, request.path);
        log::info!("request for {url} dispatched");

        let response = self
            .http
            .get(&url)
            .query(request.query)
            .header("token", &self.token)
            .header(USER_AGENT, CLIENT_AGENT)
            .send()
            .await?;

        log::debug!("response status: {}", response.status());

        match response.status() {
            StatusCode::OK => response.json::<T>().await.map_err(Into::into),
            code => Err(Error::from_status(code)),
        }
    }

    /// Fetches a listed bot by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-200
    /// status, or the body cannot be decoded.
    pub async fn get_bot(&self, id: &str) -> Result<Bot> {
        self.fetch_json(FetchRequest {
            path: format!("/bot/{id}"),
            query: &[],
        })
        .await
    }

    /// Fetches every review attached to a bot, in the order the API
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-200
    /// status, or the body cannot be decoded.
    pub async fn get_bot_reviews(&self, id: &str) -> Result<Vec<BotReview>> {
        self.fetch_json(FetchRequest {
            path: format!("/bot/{id}/reviews"),
            query: &[],
        })
        .await
    }

    /// Looks up a single user's review of a bot.
    ///
    /// Returns `None` when the user has not reviewed the bot, and also
    /// when fetching the review list fails; the two cases are not
    /// distinguished.
    pub async fn get_review(&self, user_id: &str, bot_id: &str) -> Option<BotReview> {
        let reviews = self.get_bot_reviews(bot_id).await.ok()?;
        reviews
            .into_iter()
            .find(|review| review.author_id() == user_id)
    }

    /// Searches the listing for bots matching a query string.
    ///
    /// The query value is percent-encoded before it is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-200
    /// status, or the body cannot be decoded.
    pub async fn search(&self, query: &str) -> Result<Vec<Bot>> {
        self.fetch_json(FetchRequest {
            path: String::from("/bots"),
            query: &[("q", query)],
        })
        .await
    }

    /// Reports whether a user has upvoted a bot, along with the upvote
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-200
    /// status, or the body cannot be decoded.
    pub async fn has_voted(&self, user_id: &str, bot_id: &str) -> Result<VoteData> {
        self.fetch_json(FetchRequest {
            path: format!("/bot/{bot_id}/voted"),
            query: &[("user_id", user_id)],
        })
        .await
    }
}
