//! Error types for the LoL rank lookup pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RankError>;

/// Message shown when the Riot ID cannot be resolved.
pub const PLAYER_NOT_FOUND_MESSAGE: &str = "Player not found. Check the Riot ID and tag.";

/// Message shown when the name or tag is blank.
pub const MISSING_INPUT_MESSAGE: &str = "Please enter both Game Name and Tag";

#[derive(Error, Debug)]
pub enum RankError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("{}", PLAYER_NOT_FOUND_MESSAGE)]
    PlayerNotFound,

    #[error("{message}")]
    InvalidInput { message: String },
}

impl RankError {
    /// Errors that should be reported to the caller as a failed lookup
    /// rather than propagated as an infrastructure failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            RankError::PlayerNotFound | RankError::InvalidInput { .. }
        )
    }
}

impl From<anyhow::Error> for RankError {
    fn from(err: anyhow::Error) -> Self {
        RankError::Cache {
            message: err.to_string(),
        }
    }
}
