//! Embedded PDF handling for HL7 segments.
//!
//! This module contains:
//! - `locate`: payload detection across the bare-Base64 and
//!   encapsulated-data (`Application^PDF^^Base64^<data>`) conventions
//! - `mask`: placeholder substitution for payload-bearing fields

pub mod locate;
pub mod mask;

pub use locate::{
    ENCAPSULATED_PDF_MARKER, OBX_VALUE_FIELD, PDF_MAGIC_PREFIX, PdfPayload,
    has_encapsulated_marker, has_embedded_pdf, is_pdf_magic_prefix, locate,
};
pub use mask::{PDF_PLACEHOLDER, display_value, should_mask};
