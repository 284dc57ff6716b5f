//! Error types for holdfast-core

use crate::InputId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input not registered: {0}")]
    UnknownInput(InputId),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
