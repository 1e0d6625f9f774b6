//! Display modes and page-to-viewport scaling.

use std::fmt;

use crate::options::{Viewport, ViewerOptions};

/// How a page is fitted into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ViewMode {
    /// Scale so the page fills the viewport width; tall pages scroll.
    #[default]
    PageWidth,
    /// Scale so the whole page is visible, never upscaling.
    FullPage,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::PageWidth => "Page Width",
            ViewMode::FullPage => "Full Page",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unscaled page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, used when a page declares no usable MediaBox.
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// Pixel dimensions of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
}

/// Scale factor that fits `page` into `viewport` under `mode`.
pub fn fit_scale(
    mode: ViewMode,
    page: PageSize,
    viewport: Viewport,
    options: &ViewerOptions,
) -> f64 {
    let width_scale = viewport.width / page.width;
    match mode {
        ViewMode::PageWidth => width_scale,
        ViewMode::FullPage => {
            let height_scale = viewport.height * options.full_page_height_ratio / page.height;
            height_scale.min(width_scale).min(options.max_full_page_scale)
        }
    }
}

/// Bitmap size for `page` rendered under `mode`. Each side is at least 1px.
pub fn bitmap_size(
    mode: ViewMode,
    page: PageSize,
    viewport: Viewport,
    options: &ViewerOptions,
) -> Bitmap {
    let scale = fit_scale(mode, page, viewport, options);
    let side = |len: f64| (len * scale).round().max(1.0) as u32;
    Bitmap {
        width: side(page.width),
        height: side(page.height),
    }
}
