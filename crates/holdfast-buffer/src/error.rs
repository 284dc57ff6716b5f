//! Error types for holdfast-buffer

use holdfast_core::InputId;
use thiserror::Error;

/// Input buffer error type
#[derive(Debug, Error)]
pub enum Error {
    /// A buffer needs at least one row
    #[error("Input buffer size must be greater than 0")]
    ZeroCapacity,

    /// Registry or raw input error
    #[error(transparent)]
    Core(#[from] holdfast_core::Error),

    /// Motion command lookup by an identifier the session does not define
    #[error("Motion command not registered: {0}")]
    UnknownMotion(InputId),

    /// Configuration rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Result type for input buffer operations
pub type Result<T> = std::result::Result<T, Error>;
