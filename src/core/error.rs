use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Message exactly as the provider reported it
    #[error("{0}")]
    Provider(String),
    #[error("identity provider is not available on this page")]
    Unavailable,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown column id: {0}")]
    UnknownColumn(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}
