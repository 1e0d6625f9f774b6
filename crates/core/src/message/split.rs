//! Segment splitting for raw HL7 message text.

/// Line-ending convention used to separate segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    CrLf,
    Lf,
    Cr,
    /// No line terminator present; the whole text is a single segment.
    None,
}

impl LineEnding {
    /// Detect the convention for `text`. Priority is CRLF, then LF, then CR.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else if text.contains('\n') {
            LineEnding::Lf
        } else if text.contains('\r') {
            LineEnding::Cr
        } else {
            LineEnding::None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::None => "",
        }
    }
}

/// Byte order mark, left in place by plain file reads of UTF-8 exports.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split message text into trimmed, non-empty segment lines in input order.
///
/// Exactly one line-ending convention governs the split. A stray terminator
/// of another convention stays inside its line (trimming only removes it at
/// the line edges). Trimming also removes byte order marks.
pub fn split_segments(text: &str) -> Vec<&str> {
    let lines: Box<dyn Iterator<Item = &str>> = match LineEnding::detect(text) {
        LineEnding::None => Box::new(std::iter::once(text)),
        ending => Box::new(text.split(ending.as_str())),
    };

    lines
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK))
        .filter(|line| !line.is_empty())
        .collect()
}
