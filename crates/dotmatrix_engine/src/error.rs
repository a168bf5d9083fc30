//! Unified error types for dotmatrix_engine

use thiserror::Error;

/// Main error type for dotmatrix_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("dot (x: {x}, y: {y}) outside the {side}x{side} grid")]
    DotOutOfRange { x: i32, y: i32, side: i32 },

    #[error("bit address (byte: {byte}, bit: {bit}) outside the {side}x{side} grid")]
    AddressOutOfRange { byte: usize, bit: u8, side: i32 },

    #[error("grid side must be positive, got {side}")]
    InvalidSide { side: i32 },

    #[error("invalid base64 data: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("bitmap length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for dotmatrix_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
