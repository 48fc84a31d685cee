use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can be returned by the Listcord API client.
///
/// The four status variants reproduce the messages the official API
/// wrappers report for those codes; their `Display` output is stable.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not complete, or a 200 body failed to decode.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the token sent with the request.
    #[error("401! Invalid token!")]
    InvalidToken,

    /// The requested bot, review or vote record does not exist.
    #[error("404! Not Found!")]
    NotFound,

    /// Too many requests in a short window.
    #[error("429! You have been rate limited by the api!")]
    RateLimited,

    /// The API failed internally.
    #[error("500! Something went wrong in the api server!")]
    ApiServer,

    /// Any other non-200 status.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),
}

impl Error {
    /// Maps a non-200 status onto its fixed API error.
    pub(crate) fn from_status(status: StatusCode) -> Error {
        match status {
            StatusCode::UNAUTHORIZED => Error::InvalidToken,
            StatusCode::NOT_FOUND => Error::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
            StatusCode::INTERNAL_SERVER_ERROR => Error::ApiServer,
            code => Error::UnexpectedStatus(code),
        }
    }
}
