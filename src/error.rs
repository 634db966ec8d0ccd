//! Error types for FrameKit

use crate::types::Resolution;
use thiserror::Error;

/// Result type alias for FrameKit operations
pub type Result<T> = std::result::Result<T, Error>;

/// FrameKit error type
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    // State errors
    #[error("Processor not initialized")]
    NotInitialized,

    // Contract errors
    #[error("Empty {0} buffer")]
    EmptyBuffer(&'static str),

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputTooSmall { expected: usize, actual: usize },

    #[error("Output size mismatch: expected {expected}, got {actual}")]
    OutputTooSmall { expected: usize, actual: usize },

    #[error("Frame dimensions {actual} do not match initialized dimensions {expected}")]
    DimensionMismatch {
        expected: Resolution,
        actual: Resolution,
    },

    #[error("Unknown processing mode: {0}")]
    UnknownMode(i32),

    #[error("Buffer allocation failed: {0}")]
    Allocation(String),

    // Internal processing faults
    #[error("Processing error: {0}")]
    Processing(String),

    // General errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the caller broke the buffer/mode contract
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::EmptyBuffer(_)
                | Error::InputTooSmall { .. }
                | Error::OutputTooSmall { .. }
                | Error::DimensionMismatch { .. }
                | Error::UnknownMode(_)
        )
    }

    /// Check if the next frame can be processed without re-initializing
    pub fn is_recoverable(&self) -> bool {
        self.is_contract_violation() || matches!(self, Error::Processing(_))
    }
}
