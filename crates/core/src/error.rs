//! Error types for the hl7lens viewer core.

use thiserror::Error;

/// Primary error type for payload decoding and rendering operations.
///
/// Message splitting, field decomposition, label lookup and payload location
/// are total functions and never produce an error.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("PDF renderer is unavailable")]
    RendererUnavailable,

    #[error("failed to load PDF document: {0}")]
    Load(String),

    #[error("failed to render page {page}: {message}")]
    Render { page: u32, message: String },

    #[error("segment index out of range: {0}")]
    SegmentOutOfRange(usize),
}

/// Convenience Result type alias for ViewerError.
pub type Result<T> = std::result::Result<T, ViewerError>;
