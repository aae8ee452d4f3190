use thiserror::Error;

/// Fetch error kinds for the taskfeed client
///
/// Every failure is captured into a displayable, non-fatal value; nothing
/// here aborts the session. Variants carry owned message strings rather
/// than boxed sources because failed states are cached and cloned into
/// snapshots handed to observers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure reaching the remote source
    #[error("network request failed: {message}")]
    Network { message: String },

    /// Non-success response from the server, with its reported message
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response payload that could not be decoded
    #[error("malformed response payload: {message}")]
    Parse { message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse {
                message: err.to_string(),
            }
        } else {
            FetchError::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
