//! Error types for the scoring feed

use std::fmt;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug)]
pub enum FeedError {
    /// HTTP request failed
    Http(reqwest::Error),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),

    /// Backend returned a non-success status
    Status { code: u16, body: String },

    /// Configuration error
    Config(String),

    /// Sign-in rejected; carries the user-displayable message
    Login(String),

    /// Generic error with message
    Other(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(err) => write!(f, "HTTP error: {}", err),
            FeedError::Json(err) => write!(f, "JSON error: {}", err),
            FeedError::Status { code, body } => {
                write!(f, "Backend responded with status {}: {}", code, body)
            }
            FeedError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FeedError::Login(msg) => write!(f, "Sign-in failed: {}", msg),
            FeedError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(err) => Some(err),
            FeedError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Json(err)
    }
}
