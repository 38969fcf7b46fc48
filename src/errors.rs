//! Unified error type for `CraftBot`.

use thiserror::Error;

/// All errors the bot can surface. Store loading never produces one of these
/// (it self-heals to the default mapping); persistence and startup do.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration problem - fatal, the process does not start.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while persisting the response store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure while persisting the response store.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or unreadable environment variable.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
