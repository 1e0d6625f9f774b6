//! Contract for the external PDF rendering engine.

use crate::error::Result;
use crate::options::Viewport;

use super::layout::{Bitmap, ViewMode};

/// A paginated PDF rasterizer the viewer delegates to.
///
/// The viewer supplies decoded bytes and page/mode intents; implementations
/// own the loaded document between calls.
pub trait PdfRenderer {
    /// Whether the engine can be used right now. Called before every load.
    fn ensure_available(&mut self) -> bool;

    /// Load a document and return its page count.
    ///
    /// Failures should be reported as [`crate::ViewerError::Load`].
    fn load_document(&mut self, bytes: &[u8]) -> Result<u32>;

    /// Rasterize a 1-based page of the loaded document.
    ///
    /// Failures should be reported as [`crate::ViewerError::Render`].
    fn render_page(&mut self, page: u32, viewport: Viewport, mode: ViewMode) -> Result<Bitmap>;
}
