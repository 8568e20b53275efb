use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single Open-Meteo request.
///
/// Every variant collapses into the same "no data" fallback at the tool
/// boundary; the distinction only survives in the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid JSON body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Transport(err)
        }
    }
}
