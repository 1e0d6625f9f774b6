//! HL7 segments and their pipe-delimited fields.

/// Field delimiter. The MSH encoding-characters field is not honored.
pub const FIELD_SEPARATOR: char = '|';

/// Split one segment line into its fields.
///
/// Empty leading, inner and trailing tokens are preserved. Field 0 is the
/// segment type.
pub fn decompose(segment: &str) -> Vec<&str> {
    segment.split(FIELD_SEPARATOR).collect()
}

/// One line of an HL7 message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    fields: Vec<String>,
}

impl Segment {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            fields: decompose(raw).into_iter().map(str::to_string).collect(),
        }
    }

    /// Segment identifier, e.g. `"MSH"` or `"OBX"`. Always equal to field 0.
    pub fn segment_type(&self) -> &str {
        // split always yields at least one token
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// All fields including the type at index 0.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, where 1 is the first field after the type.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Raw text cut to `max_chars` characters, with `...` appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.raw.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.raw[..cut]),
            None => self.raw.clone(),
        }
    }
}
