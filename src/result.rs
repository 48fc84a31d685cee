use crate::error::Error;

/// Alias for results returned by client calls.
pub type Result<T> = std::result::Result<T, Error>;
