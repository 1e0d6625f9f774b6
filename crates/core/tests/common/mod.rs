//! Shared fixtures for integration tests.

#![allow(dead_code)]

use hl7lens_core::viewer::{Bitmap, PdfRenderer, ViewMode};
use hl7lens_core::{Result, ViewerError, Viewport};

/// Base64 of a minimal one-line PDF header, `%PDF-1.4\n`.
pub const PDF_HEADER_B64: &str = "JVBERi0xLjQK";

/// ORU^R01 with a report PDF in OBX-5 using the encapsulated-data convention.
pub const ORU_WITH_PDF: &str = "MSH|^~\\&|LAB|HOSP|EMR|HOSP|202401011200||ORU^R01|MSG0001|P|2.5\r\n\
PID|1||12345^^^HOSP^MR||DOE^JANE||19800101|F\r\n\
OBR|1|ORD1|FIL1|RPT^Report\r\n\
OBX|1|ED|PDF^Report||^Application^PDF^^Base64^JVBERi0xLjQKJcfsj6IK||||||F\r\n";

/// In-memory renderer with scripted results.
#[derive(Debug)]
pub struct FakeRenderer {
    pub available: bool,
    /// Page count, or the load failure message.
    pub pages: std::result::Result<u32, String>,
    pub fail_page: Option<u32>,
    pub loaded: Vec<Vec<u8>>,
    pub renders: Vec<(u32, ViewMode, Viewport)>,
}

impl FakeRenderer {
    pub fn with_pages(pages: u32) -> Self {
        Self {
            available: true,
            pages: Ok(pages),
            fail_page: None,
            loaded: Vec::new(),
            renders: Vec::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_pages(1)
        }
    }
}

impl PdfRenderer for FakeRenderer {
    fn ensure_available(&mut self) -> bool {
        self.available
    }

    fn load_document(&mut self, bytes: &[u8]) -> Result<u32> {
        self.loaded.push(bytes.to_vec());
        self.pages.clone().map_err(ViewerError::Load)
    }

    fn render_page(&mut self, page: u32, viewport: Viewport, mode: ViewMode) -> Result<Bitmap> {
        self.renders.push((page, mode, viewport));
        if self.fail_page == Some(page) {
            return Err(ViewerError::Render {
                page,
                message: "corrupt content stream".to_string(),
            });
        }
        Ok(Bitmap {
            width: viewport.width as u32,
            height: page * 10,
        })
    }
}
