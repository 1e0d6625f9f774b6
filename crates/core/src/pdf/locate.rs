//! Detection and extraction of Base64 PDF payloads embedded in segments.

/// Base64 encoding of the PDF file signature `%PDF-1`.
pub const PDF_MAGIC_PREFIX: &str = "JVBERi0xL";

/// Encapsulated-data marker, `Application^PDF^^Base64[^<data>]`.
pub const ENCAPSULATED_PDF_MARKER: &str = "Application^PDF^^Base64";

/// OBX-5, Observation Value.
pub const OBX_VALUE_FIELD: usize = 5;

const COMPONENT_SEPARATOR: char = '^';

/// Slot of the encapsulated data when no component carries the PDF prefix.
const ED_DATA_COMPONENT: usize = 3;

/// Whether `value` starts with the Base64 encoding of `%PDF-1`.
pub fn is_pdf_magic_prefix(value: &str) -> bool {
    value.starts_with(PDF_MAGIC_PREFIX)
}

/// Whether `value` uses the encapsulated-data PDF convention.
pub fn has_encapsulated_marker(value: &str) -> bool {
    value.contains(ENCAPSULATED_PDF_MARKER)
}

/// A Base64 PDF found inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPayload {
    /// Field the payload came from. Always 5 for OBX.
    pub source_field_index: usize,
    /// Raw Base64 text, exactly as it appears in the message.
    pub base64: String,
}

impl PdfPayload {
    pub fn new(source_field_index: usize, base64: impl Into<String>) -> Self {
        Self {
            source_field_index,
            base64: base64.into(),
        }
    }
}

/// Locate the PDF payload of a segment, if any.
///
/// `fields` is the full decomposition, type included at index 0. At most one
/// payload is returned per segment.
pub fn locate<S: AsRef<str>>(segment_type: &str, fields: &[S]) -> Option<PdfPayload> {
    let payload = if segment_type == "OBX" {
        fields
            .get(OBX_VALUE_FIELD)
            .and_then(|value| locate_in_observation_value(value.as_ref()))
            .map(|base64| PdfPayload::new(OBX_VALUE_FIELD, base64))
    } else {
        fields
            .iter()
            .position(|field| is_pdf_magic_prefix(field.as_ref()))
            .map(|index| PdfPayload::new(index, fields[index].as_ref()))
    };

    match &payload {
        Some(found) => tracing::debug!(
            segment_type,
            field = found.source_field_index,
            len = found.base64.len(),
            "located embedded PDF"
        ),
        None => tracing::trace!(segment_type, "no embedded PDF"),
    }
    payload
}

fn locate_in_observation_value(value: &str) -> Option<&str> {
    if has_encapsulated_marker(value) {
        let components: Vec<&str> = value.split(COMPONENT_SEPARATOR).collect();
        return first_pdf_component(&components).or_else(|| {
            // Heuristic for malformed encapsulated data: take the 4th
            // component even without the PDF prefix. Not generalized further.
            components
                .get(ED_DATA_COMPONENT)
                .copied()
                .filter(|component| !component.is_empty())
        });
    }

    if is_pdf_magic_prefix(value) {
        return Some(value);
    }

    let components: Vec<&str> = value.split(COMPONENT_SEPARATOR).collect();
    first_pdf_component(&components)
}

fn first_pdf_component<'a>(components: &[&'a str]) -> Option<&'a str> {
    components
        .iter()
        .copied()
        .find(|component| is_pdf_magic_prefix(component))
}

/// Quick check: does any field look like it carries a PDF?
///
/// True for a field starting with the PDF prefix or containing the
/// encapsulated-data marker, regardless of segment type or position.
pub fn has_embedded_pdf<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.iter().any(|field| {
        let field = field.as_ref();
        is_pdf_magic_prefix(field) || has_encapsulated_marker(field)
    })
}
