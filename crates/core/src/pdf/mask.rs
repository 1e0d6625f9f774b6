//! Hiding Base64 PDF text in field listings.

use super::locate::{OBX_VALUE_FIELD, has_encapsulated_marker, is_pdf_magic_prefix};

/// Text shown in place of a field that carries PDF data.
pub const PDF_PLACEHOLDER: &str = "[PDF Data - See viewer below]";

/// Whether the value at `field_index` should be hidden from a field table.
///
/// OBX-5 is hidden when it uses the encapsulated-data convention or is a bare
/// Base64 PDF. Every other field is hidden only when it is a bare Base64 PDF.
pub fn should_mask(segment_type: &str, field_index: usize, value: &str) -> bool {
    if segment_type == "OBX" && field_index == OBX_VALUE_FIELD {
        has_encapsulated_marker(value) || is_pdf_magic_prefix(value)
    } else {
        is_pdf_magic_prefix(value)
    }
}

/// `value`, or the placeholder when [`should_mask`] holds.
pub fn display_value<'a>(segment_type: &str, field_index: usize, value: &'a str) -> &'a str {
    if should_mask(segment_type, field_index, value) {
        PDF_PLACEHOLDER
    } else {
        value
    }
}
