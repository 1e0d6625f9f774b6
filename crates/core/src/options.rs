//! Viewer configuration.

/// Drawable area available to the PDF canvas, in CSS-style pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Options controlling presentation of segments and embedded PDFs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Initial viewport handed to the renderer.
    pub viewport: Viewport,

    /// Fraction of the viewport height a full-page render may occupy.
    pub full_page_height_ratio: f64,

    /// Upper bound on the full-page scale factor. 1.0 means never upscale.
    pub max_full_page_scale: f64,

    /// Number of characters shown in a segment preview before truncation.
    pub preview_width: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            full_page_height_ratio: 0.85,
            max_full_page_scale: 1.0,
            preview_width: 80,
        }
    }
}
