//! Base64 decoding of embedded PDF payloads and data-URI export.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::Result;

/// MIME type of the decoded payload.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File name suggested when a payload is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "document.pdf";

/// Standard alphabet; trailing `=` padding may be present or omitted, but
/// padding that is present must be well-formed. Unused bits in the final
/// symbol are discarded rather than rejected.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a Base64 payload into raw bytes.
///
/// ASCII whitespace is ignored. No PDF structure validation is done on the
/// result.
pub fn decode(base64: &str) -> Result<Vec<u8>> {
    let compact: String = base64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    match PAYLOAD_ENGINE.decode(compact.as_bytes()) {
        Ok(bytes) => {
            tracing::debug!(encoded = compact.len(), decoded = bytes.len(), "decoded payload");
            Ok(bytes)
        }
        Err(err) => {
            tracing::warn!(error = %err, "payload is not valid base64");
            Err(err.into())
        }
    }
}

/// Build an RFC 2397 data URI for a Base64 PDF payload.
///
/// The Base64 text is embedded as-is; it is not decoded and re-encoded.
pub fn pdf_data_uri(base64: &str) -> String {
    format!("data:{PDF_MIME_TYPE};base64,{base64}")
}
