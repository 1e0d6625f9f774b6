//! HL7 v2 message parsing.
//!
//! This module contains:
//! - `split`: segment splitting tolerant of CRLF, LF and CR line endings
//! - `segment`: pipe-delimited field decomposition and the `Segment` type
//!
//! Only the field delimiter is interpreted. Components, repetitions and
//! escape sequences are left as literal text.

pub mod segment;
pub mod split;

pub use segment::{FIELD_SEPARATOR, Segment, decompose};
pub use split::{BYTE_ORDER_MARK, LineEnding, split_segments};

/// A parsed HL7 message: its segments in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    /// Parse raw message text. Never fails; text without segments yields an
    /// empty message.
    pub fn parse(text: &str) -> Self {
        let segments: Vec<Segment> = split_segments(text)
            .into_iter()
            .map(Segment::new)
            .collect();
        tracing::debug!(count = segments.len(), "parsed HL7 message");
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
