//! Viewer state machine for one selected PDF payload.
//!
//! The machine never calls the renderer itself. It hands out load and render
//! requests, and the caller reports completions back. Every request carries
//! the selection generation, and render requests also carry a sequence
//! number, so a completion that arrives after a newer selection or a newer
//! render request is dropped instead of overwriting the display.

use std::sync::Arc;

use crate::codec::{self, DOWNLOAD_FILE_NAME};
use crate::error::{Result, ViewerError};
use crate::options::Viewport;
use crate::pdf::PdfPayload;

use super::layout::{Bitmap, ViewMode};

/// Why a load attempt ended in [`ViewerState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    RendererUnavailable,
    DecodeError,
    LoadError,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::RendererUnavailable => "renderer-unavailable",
            FailureKind::DecodeError => "decode-error",
            FailureKind::LoadError => "load-error",
        }
    }
}

/// Reason and user-facing message for a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    fn from_error(err: &ViewerError) -> Self {
        let kind = match err {
            ViewerError::RendererUnavailable => FailureKind::RendererUnavailable,
            ViewerError::Decode(_) => FailureKind::DecodeError,
            _ => FailureKind::LoadError,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    /// No payload selected.
    #[default]
    Idle,
    /// Decode and document load in flight.
    Loading,
    Ready {
        current_page: u32,
        total_pages: u32,
        mode: ViewMode,
    },
    Failed(Failure),
}

/// Ticket for one load attempt of the current payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
}

/// Ticket asking the renderer to draw one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub generation: u64,
    pub sequence: u64,
    pub page: u32,
    pub mode: ViewMode,
    pub viewport: Viewport,
}

/// The page currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: u32,
    pub mode: ViewMode,
    pub bitmap: Bitmap,
}

/// Result of reporting a render completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Displayed(RenderedPage),
    /// The page failed to rasterize. The document stays loaded.
    PageFailed { page: u32, message: String },
    /// A newer selection or render request superseded this one.
    Stale,
}

/// Ways to reach the PDF when inline viewing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub open_uri: String,
    pub download_uri: String,
    pub download_name: &'static str,
    /// Offer a retry of inline viewing.
    pub retry: bool,
}

/// Page, mode and load state for the selected payload.
#[derive(Debug, Clone, Default)]
pub struct PdfViewer {
    state: ViewerState,
    payload: Option<PdfPayload>,
    bytes: Option<Arc<[u8]>>,
    viewport: Viewport,
    generation: u64,
    render_sequence: u64,
    displayed: Option<RenderedPage>,
    page_error: Option<(u32, String)>,
}

impl PdfViewer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Payload of the current selection. Kept through failures for retry.
    pub fn payload(&self) -> Option<&PdfPayload> {
        self.payload.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn displayed(&self) -> Option<&RenderedPage> {
        self.displayed.as_ref()
    }

    /// Most recent page rasterization failure, if the last render failed.
    pub fn page_error(&self) -> Option<(u32, &str)> {
        self.page_error
            .as_ref()
            .map(|(page, message)| (*page, message.as_str()))
    }

    pub fn current_page(&self) -> Option<u32> {
        match self.state {
            ViewerState::Ready { current_page, .. } => Some(current_page),
            _ => None,
        }
    }

    pub fn total_pages(&self) -> Option<u32> {
        match self.state {
            ViewerState::Ready { total_pages, .. } => Some(total_pages),
            _ => None,
        }
    }

    pub fn mode(&self) -> Option<ViewMode> {
        match self.state {
            ViewerState::Ready { mode, .. } => Some(mode),
            _ => None,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.state, ViewerState::Ready { current_page, .. } if current_page > 1)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(
            self.state,
            ViewerState::Ready { current_page, total_pages, .. } if current_page < total_pages
        )
    }

    /// `Page 2 / 5 (Page Width)`, when a document is loaded.
    pub fn page_indicator(&self) -> Option<String> {
        match self.state {
            ViewerState::Ready {
                current_page,
                total_pages,
                mode,
            } => Some(format!("Page {current_page} / {total_pages} ({mode})")),
            _ => None,
        }
    }

    /// Drop the selection and return to `Idle`.
    pub fn clear(&mut self) {
        self.reset();
        self.payload = None;
        self.state = ViewerState::Idle;
    }

    /// Start viewing `payload`, discarding everything about the previous one.
    pub fn select(&mut self, payload: PdfPayload) -> LoadRequest {
        self.reset();
        tracing::debug!(
            generation = self.generation,
            field = payload.source_field_index,
            "selected PDF payload"
        );
        self.payload = Some(payload);
        self.state = ViewerState::Loading;
        LoadRequest {
            generation: self.generation,
        }
    }

    /// Re-attempt a failed load from the retained Base64 text.
    ///
    /// Returns `None` unless the viewer is `Failed`.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        if !matches!(self.state, ViewerState::Failed(_)) || self.payload.is_none() {
            return None;
        }
        self.reset();
        tracing::debug!(generation = self.generation, "retrying PDF load");
        self.state = ViewerState::Loading;
        Some(LoadRequest {
            generation: self.generation,
        })
    }

    /// First half of a load: renderer availability, then Base64 decode.
    ///
    /// Returns the decoded document on success. On failure the viewer moves to
    /// `Failed` and `None` is returned. Stale requests return `None` without
    /// touching state. The payload is decoded at most once per load attempt.
    pub fn begin_load(
        &mut self,
        request: LoadRequest,
        renderer_available: bool,
    ) -> Option<Arc<[u8]>> {
        if !self.is_current_load(request) {
            return None;
        }
        if !renderer_available {
            self.fail(&ViewerError::RendererUnavailable);
            return None;
        }
        match self.decoded_bytes() {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Second half of a load: the renderer's document load result.
    ///
    /// On success the viewer becomes `Ready` on page 1 in page-width mode and
    /// the render request for that page is returned.
    pub fn finish_load(
        &mut self,
        request: LoadRequest,
        total_pages: Result<u32>,
    ) -> Option<RenderRequest> {
        if !self.is_current_load(request) {
            return None;
        }
        match total_pages {
            Ok(0) => {
                self.fail(&ViewerError::Load("document has no pages".to_string()));
                None
            }
            Ok(total_pages) => {
                tracing::debug!(total_pages, "PDF loaded");
                self.state = ViewerState::Ready {
                    current_page: 1,
                    total_pages,
                    mode: ViewMode::PageWidth,
                };
                self.render_request()
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev_page(&mut self) -> Option<RenderRequest> {
        if !self.can_go_prev() {
            return None;
        }
        if let ViewerState::Ready { current_page, .. } = &mut self.state {
            *current_page -= 1;
        }
        self.render_request()
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> Option<RenderRequest> {
        if !self.can_go_next() {
            return None;
        }
        if let ViewerState::Ready { current_page, .. } = &mut self.state {
            *current_page += 1;
        }
        self.render_request()
    }

    /// Jump to `page`, clamped to `1..=total_pages`. Only the target page is
    /// rendered. No-op when already there.
    pub fn go_to_page(&mut self, page: u32) -> Option<RenderRequest> {
        match &mut self.state {
            ViewerState::Ready {
                current_page,
                total_pages,
                ..
            } => {
                let target = page.clamp(1, *total_pages);
                if target == *current_page {
                    return None;
                }
                *current_page = target;
            }
            _ => return None,
        }
        self.render_request()
    }

    /// Switch display mode and re-render the current page. Requesting the
    /// active mode is a no-op.
    pub fn set_mode(&mut self, new_mode: ViewMode) -> Option<RenderRequest> {
        match &mut self.state {
            ViewerState::Ready { mode, .. } if *mode != new_mode => *mode = new_mode,
            _ => return None,
        }
        self.render_request()
    }

    /// Record a new viewport. When a document is loaded, the current page is
    /// re-rendered; the page number does not change.
    pub fn resize(&mut self, viewport: Viewport) -> Option<RenderRequest> {
        self.viewport = viewport;
        self.render_request()
    }

    /// Report the renderer's result for `request`.
    pub fn finish_render(
        &mut self,
        request: RenderRequest,
        result: Result<Bitmap>,
    ) -> RenderOutcome {
        let current = request.generation == self.generation
            && request.sequence == self.render_sequence
            && matches!(self.state, ViewerState::Ready { .. });
        if !current {
            tracing::warn!(
                page = request.page,
                sequence = request.sequence,
                latest = self.render_sequence,
                "dropping stale render completion"
            );
            return RenderOutcome::Stale;
        }

        match result {
            Ok(bitmap) => {
                let rendered = RenderedPage {
                    page: request.page,
                    mode: request.mode,
                    bitmap,
                };
                self.displayed = Some(rendered);
                self.page_error = None;
                RenderOutcome::Displayed(rendered)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(page = request.page, error = %message, "page render failed");
                self.page_error = Some((request.page, message.clone()));
                RenderOutcome::PageFailed {
                    page: request.page,
                    message,
                }
            }
        }
    }

    /// Download and open-in-new-tab affordances while `Failed`.
    pub fn fallback(&self) -> Option<Fallback> {
        let ViewerState::Failed(failure) = &self.state else {
            return None;
        };
        let payload = self.payload.as_ref()?;
        let uri = codec::pdf_data_uri(&payload.base64);
        Some(Fallback {
            open_uri: uri.clone(),
            download_uri: uri,
            download_name: DOWNLOAD_FILE_NAME,
            retry: failure.kind == FailureKind::RendererUnavailable,
        })
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.bytes = None;
        self.displayed = None;
        self.page_error = None;
    }

    fn is_current_load(&self, request: LoadRequest) -> bool {
        let current =
            request.generation == self.generation && self.state == ViewerState::Loading;
        if !current {
            tracing::warn!(
                generation = request.generation,
                latest = self.generation,
                "dropping stale load"
            );
        }
        current
    }

    fn decoded_bytes(&mut self) -> Result<Arc<[u8]>> {
        if let Some(bytes) = &self.bytes {
            return Ok(Arc::clone(bytes));
        }
        let Some(payload) = &self.payload else {
            return Err(ViewerError::Load("no payload selected".to_string()));
        };
        let bytes: Arc<[u8]> = codec::decode(&payload.base64)?.into();
        self.bytes = Some(Arc::clone(&bytes));
        Ok(bytes)
    }

    fn fail(&mut self, err: &ViewerError) {
        let failure = Failure::from_error(err);
        tracing::warn!(reason = failure.kind.as_str(), error = %err, "PDF load failed");
        self.state = ViewerState::Failed(failure);
    }

    fn render_request(&mut self) -> Option<RenderRequest> {
        let ViewerState::Ready {
            current_page, mode, ..
        } = self.state
        else {
            return None;
        };
        self.render_sequence += 1;
        Some(RenderRequest {
            generation: self.generation,
            sequence: self.render_sequence,
            page: current_page,
            mode,
            viewport: self.viewport,
        })
    }
}
