//! Error Types
//!
//! Everything the feedback core can fail with.

use thiserror::Error;

use crate::domain::FeedbackStatus;
use crate::transfer::TransferError;

/// Result type alias for feedback operations
pub type Result<T> = std::result::Result<T, FeedPulseError>;

/// A required field was blank after trimming
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("client name is required")]
    EmptyClientName,

    #[error("feedback content is required")]
    EmptyContent,
}

/// An enumeration label that matches none of the known values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Main error type for the feedback core
#[derive(Error, Debug)]
pub enum FeedPulseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: feedback #{0}")]
    NotFound(u32),

    #[error("No feedback ids left after #{0}")]
    IdsExhausted(u32),

    #[error("Corrupt state: {0}")]
    CorruptState(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition {
        from: FeedbackStatus,
        to: FeedbackStatus,
    },

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeedPulseError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FeedPulseError::Validation(_))
    }
}
