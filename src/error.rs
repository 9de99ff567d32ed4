//! Structured error types for powercells.
//!
//! Every fallible boundary in the crate funnels into [`PowercellsError`];
//! the interaction core itself never raises, it degrades (see `session`).

/// All errors that can occur while loading configuration or talking to the store.
#[derive(Debug, thiserror::Error)]
pub enum PowercellsError {
    /// SQLite error from the sheet store.
    #[error("sheet store: {0}")]
    Store(#[from] rusqlite::Error),

    /// Configuration parse error.
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PowercellsError>;
