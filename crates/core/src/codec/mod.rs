//! Codec modules for embedded payloads.
//!
//! This module contains:
//! - `payload`: Base64 decoding and PDF data-URI construction

pub mod payload;

// Re-export main functions for convenience
pub use payload::{DOWNLOAD_FILE_NAME, PDF_MIME_TYPE, decode, pdf_data_uri};
