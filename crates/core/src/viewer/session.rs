//! Synchronous driver tying a [`PdfViewer`] to a [`PdfRenderer`].

use crate::options::Viewport;
use crate::pdf::PdfPayload;

use super::layout::ViewMode;
use super::render::PdfRenderer;
use super::state::{LoadRequest, PdfViewer, RenderOutcome, RenderRequest, ViewerState};

/// Runs each viewer request against the renderer as soon as it is issued.
///
/// Completions are always current here, so nothing is ever stale; the same
/// viewer can be driven asynchronously by a host that keeps the tickets.
#[derive(Debug)]
pub struct ViewerSession<'a, R> {
    viewer: &'a mut PdfViewer,
    renderer: &'a mut R,
}

impl<'a, R: PdfRenderer> ViewerSession<'a, R> {
    pub fn new(viewer: &'a mut PdfViewer, renderer: &'a mut R) -> Self {
        Self { viewer, renderer }
    }

    pub fn viewer(&self) -> &PdfViewer {
        self.viewer
    }

    pub fn state(&self) -> &ViewerState {
        self.viewer.state()
    }

    /// Select `payload` and load it.
    pub fn open(&mut self, payload: PdfPayload) -> Option<RenderOutcome> {
        let request = self.viewer.select(payload);
        self.load(request)
    }

    /// Run an issued load request: availability check, decode, document load,
    /// then render of the first page.
    pub fn load(&mut self, request: LoadRequest) -> Option<RenderOutcome> {
        let available = self.renderer.ensure_available();
        let bytes = self.viewer.begin_load(request, available)?;
        let total_pages = self.renderer.load_document(&bytes);
        let first = self.viewer.finish_load(request, total_pages)?;
        Some(self.render(first))
    }

    /// Retry a failed load. `None` when the viewer is not `Failed` or the
    /// retry failed again.
    pub fn retry(&mut self) -> Option<RenderOutcome> {
        let request = self.viewer.retry()?;
        self.load(request)
    }

    pub fn next_page(&mut self) -> Option<RenderOutcome> {
        let request = self.viewer.next_page()?;
        Some(self.render(request))
    }

    pub fn prev_page(&mut self) -> Option<RenderOutcome> {
        let request = self.viewer.prev_page()?;
        Some(self.render(request))
    }

    /// Show `page`, clamped to the document. Intermediate pages are not
    /// rendered.
    pub fn go_to_page(&mut self, page: u32) -> Option<RenderOutcome> {
        let request = self.viewer.go_to_page(page)?;
        Some(self.render(request))
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> Option<RenderOutcome> {
        let request = self.viewer.set_mode(mode)?;
        Some(self.render(request))
    }

    pub fn resize(&mut self, viewport: Viewport) -> Option<RenderOutcome> {
        let request = self.viewer.resize(viewport)?;
        Some(self.render(request))
    }

    fn render(&mut self, request: RenderRequest) -> RenderOutcome {
        let result = self
            .renderer
            .render_page(request.page, request.viewport, request.mode);
        self.viewer.finish_render(request, result)
    }
}
