use thiserror::Error;

/// A request that never produced a usable reply.
///
/// Non-2xx statuses are not errors here; they come back as an [`crate::client::ApiReply`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}
