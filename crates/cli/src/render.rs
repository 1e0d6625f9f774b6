//! Page-tree backed renderer for the command line.
//!
//! No rasterization is done here. The renderer loads the document with lopdf,
//! reads each page's MediaBox, and reports the bitmap size a page would be
//! drawn at for the requested viewport and mode.

use hl7lens_core::viewer::{Bitmap, PageSize, PdfRenderer, ViewMode, bitmap_size};
use hl7lens_core::{Result, ViewerError, ViewerOptions, Viewport};
use lopdf::{Document, Object, ObjectId};

#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    options: ViewerOptions,
    pages: Vec<PageSize>,
}

impl LopdfRenderer {
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            options,
            pages: Vec::new(),
        }
    }

    /// Unscaled sizes of the loaded document's pages, in page order.
    pub fn page_sizes(&self) -> &[PageSize] {
        &self.pages
    }
}

impl PdfRenderer for LopdfRenderer {
    fn ensure_available(&mut self) -> bool {
        true
    }

    fn load_document(&mut self, bytes: &[u8]) -> Result<u32> {
        let doc = Document::load_mem(bytes).map_err(|e| ViewerError::Load(e.to_string()))?;
        // get_pages is keyed by 1-based page number, so values are in page order
        self.pages = doc
            .get_pages()
            .values()
            .map(|&page_id| page_size(&doc, page_id))
            .collect();
        tracing::debug!(pages = self.pages.len(), "loaded document page tree");
        Ok(self.pages.len() as u32)
    }

    fn render_page(&mut self, page: u32, viewport: Viewport, mode: ViewMode) -> Result<Bitmap> {
        let size = page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .copied()
            .ok_or_else(|| ViewerError::Render {
                page,
                message: format!("document has {} pages", self.pages.len()),
            })?;
        Ok(bitmap_size(mode, size, viewport, &self.options))
    }
}

/// Page size from the (possibly inherited) MediaBox, US Letter when missing
/// or unusable.
fn page_size(doc: &Document, page_id: ObjectId) -> PageSize {
    match media_box(doc, page_id) {
        Some([x0, y0, x1, y1]) if x1 != x0 && y1 != y0 => PageSize {
            width: (x1 - x0).abs(),
            height: (y1 - y0).abs(),
        },
        _ => {
            tracing::debug!(?page_id, "no usable MediaBox, assuming US Letter");
            PageSize::LETTER
        }
    }
}

fn media_box(doc: &Document, page_id: ObjectId) -> Option<[f64; 4]> {
    let array = resolve(doc, inherited(doc, page_id, b"MediaBox")?)
        .as_array()
        .ok()?;
    if array.len() != 4 {
        return None;
    }
    let mut rect = [0.0; 4];
    for (slot, obj) in rect.iter_mut().zip(array) {
        *slot = number(resolve(doc, obj))?;
    }
    Some(rect)
}

/// Look `key` up on the page dictionary, then up the `/Parent` chain.
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = page_id;
    // bounded walk, a malformed tree may contain a /Parent cycle
    for _ in 0..64 {
        let dict = doc.get_object(current).and_then(Object::as_dict).ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        current = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}
