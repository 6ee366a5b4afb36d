//! Error types for slot computation and its collaborating ports.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotwiseError {
    /// The queried date range ends before it starts.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The timezone string is not a recognized IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The availability configuration violates a structural invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No availability configuration has been written yet. Raised by
    /// callers ahead of slot computation, never by the engine itself.
    #[error("Configuration not found")]
    ConfigurationMissing,

    /// The calendar gateway could not be reached or refused the request.
    /// Never collapsed into an empty busy list.
    #[error("Calendar unavailable: {0}")]
    CalendarUnavailable(String),

    /// Filesystem failure in the config store.
    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// The stored config document could not be (de)serialized.
    #[error("Store document error: {0}")]
    StoreDocument(#[from] serde_json::Error),
}

/// Convenience alias used throughout slotwise-engine.
pub type Result<T> = std::result::Result<T, SlotwiseError>;
