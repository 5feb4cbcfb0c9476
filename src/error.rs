
use thiserror::Error;

/// Failure reported by a user supplied transform.
///
/// The mapper never inspects or rewraps it, so whatever the transform
/// says is what the caller of `encode`/`decode` gets back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum RecmapError {
    #[error("Invalid field position {position} for a record of arity {arity}")]
    InvalidFieldPosition { position: usize, arity: usize },
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("SQL error: {0}")]
    Sql(String),
}

pub type Result<T> = std::result::Result<T, RecmapError>;

// Helper conversions
impl From<rusqlite::Error> for RecmapError {
    fn from(e: rusqlite::Error) -> Self { Self::Sql(e.to_string()) }
}
impl From<serde_json::Error> for RecmapError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e.to_string()) }
}
impl From<config::ConfigError> for RecmapError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
