//! Application state: the loaded message, the selected segment and its viewer.

use crate::dictionary;
use crate::error::{Result, ViewerError};
use crate::message::{Message, Segment};
use crate::options::ViewerOptions;
use crate::pdf::{self, PdfPayload};
use crate::viewer::{LoadRequest, PdfRenderer, PdfViewer, ViewerSession};

/// One row of the segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSummary {
    pub index: usize,
    pub segment_type: String,
    pub preview: String,
    pub has_pdf: bool,
}

/// One labelled field of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// 1-based field position.
    pub index: usize,
    pub label: String,
    /// Field text, or the PDF placeholder when `masked`.
    pub value: String,
    pub masked: bool,
}

/// Everything shown for a selected segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDetails {
    pub segment_type: String,
    pub rows: Vec<FieldRow>,
    pub payload: Option<PdfPayload>,
}

impl SegmentDetails {
    pub fn from_segment(segment: &Segment) -> Self {
        let segment_type = segment.segment_type();
        let rows = segment
            .fields()
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, value)| FieldRow {
                index,
                label: dictionary::label(segment_type, index),
                value: pdf::display_value(segment_type, index, value).to_string(),
                masked: pdf::should_mask(segment_type, index, value),
            })
            .collect();

        Self {
            segment_type: segment_type.to_string(),
            rows,
            payload: pdf::locate(segment_type, segment.fields()),
        }
    }
}

/// Owns all state of one viewing session. Loading a new message or selecting
/// a different segment discards the previous PDF state entirely.
#[derive(Debug, Clone, Default)]
pub struct ViewerApp {
    options: ViewerOptions,
    message: Message,
    selected: Option<usize>,
    viewer: PdfViewer,
}

impl ViewerApp {
    pub fn new(options: ViewerOptions) -> Self {
        let viewer = PdfViewer::new(options.viewport);
        Self {
            options,
            message: Message::default(),
            selected: None,
            viewer,
        }
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Replace the current message with `text`.
    pub fn load_message(&mut self, text: &str) {
        self.message = Message::parse(text);
        self.selected = None;
        self.viewer.clear();
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn segments(&self) -> &[Segment] {
        self.message.segments()
    }

    pub fn summaries(&self) -> Vec<SegmentSummary> {
        self.segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentSummary {
                index,
                segment_type: segment.segment_type().to_string(),
                preview: segment.preview(self.options.preview_width),
                has_pdf: pdf::has_embedded_pdf(segment.fields()),
            })
            .collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected.and_then(|index| self.message.get(index))
    }

    /// Select the segment at `index` (0-based).
    ///
    /// Returns the load request when the segment carries a PDF payload. A
    /// segment without one leaves the viewer `Idle`.
    pub fn select_segment(&mut self, index: usize) -> Result<Option<LoadRequest>> {
        let segment = self
            .message
            .get(index)
            .ok_or(ViewerError::SegmentOutOfRange(index))?;
        let payload = pdf::locate(segment.segment_type(), segment.fields());
        self.selected = Some(index);

        Ok(match payload {
            Some(payload) => Some(self.viewer.select(payload)),
            None => {
                self.viewer.clear();
                None
            }
        })
    }

    pub fn details(&self, index: usize) -> Result<SegmentDetails> {
        self.message
            .get(index)
            .map(SegmentDetails::from_segment)
            .ok_or(ViewerError::SegmentOutOfRange(index))
    }

    pub fn viewer(&self) -> &PdfViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut PdfViewer {
        &mut self.viewer
    }

    /// Drive the viewer synchronously with `renderer`.
    pub fn session<'a, R: PdfRenderer>(
        &'a mut self,
        renderer: &'a mut R,
    ) -> ViewerSession<'a, R> {
        ViewerSession::new(&mut self.viewer, renderer)
    }
}
