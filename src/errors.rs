use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
}

impl From<url::ParseError> for ScoutError {
    fn from(e: url::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

/// The only failure a profile lookup reports to its caller.
///
/// Network failures and pages that yield neither a name nor a level
/// collapse into the same value, so the two cannot be told apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchError {
    #[error("Failed to fetch profile data")]
    FetchFailed,
}
