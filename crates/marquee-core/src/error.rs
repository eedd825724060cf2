use thiserror::Error;

use crate::entity::EntityId;

/// Error type shared by every crate in the Marquee workspace.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// A weight was requested for an entity that has no row in the pattern.
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// A position outside `[1, length]` was requested.
    #[error("Position {position} out of range for pattern of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    /// Slice bounds that describe a negative length or start before position 1.
    #[error("Invalid range: {start}..={stop}")]
    InvalidRange { start: usize, stop: usize },

    /// p-value requested on a non-empty pattern with no registered entities.
    #[error("Degenerate alphabet: no entities registered for pattern of length {length}")]
    DegenerateAlphabet { length: usize },

    /// p-value recursion deeper than the configured limit.
    #[error("Recursion depth {depth} exceeds limit {limit}")]
    RecursionLimit { depth: usize, limit: usize },

    /// Rating outside the accepted scale (or NaN).
    #[error("Invalid rating: {0} (expected 1.0 to 10.0)")]
    InvalidRating(f64),

    /// Ensemble larger than the engine accepts for p-value computation.
    #[error("Too many entries: {count} (maximum {max})")]
    TooManyEntries { count: usize, max: usize },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage layer error (file I/O).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Operation not valid for the current inputs.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A background worker failed before producing a result.
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for MarqueeError {
    fn from(e: serde_json::Error) -> Self {
        MarqueeError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for MarqueeError {
    fn from(e: std::io::Error) -> Self {
        MarqueeError::Storage(e.to_string())
    }
}
