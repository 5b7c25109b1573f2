use thiserror::Error;

/// Anything that ends a connection's push loop.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("malformed pull request payload: {0}")]
    Parse(String),

    #[error("bad timestamp: {0:?}")]
    TimestampFormat(String),
}
