//! Inline PDF viewing.
//!
//! This module contains:
//! - `state`: the per-selection viewer state machine and its request tickets
//! - `render`: the contract for the external rendering engine
//! - `layout`: display modes and page scaling
//! - `session`: a synchronous driver running the state machine against a renderer

pub mod layout;
pub mod render;
pub mod session;
pub mod state;

pub use layout::{Bitmap, PageSize, ViewMode, bitmap_size, fit_scale};
pub use render::PdfRenderer;
pub use session::ViewerSession;
pub use state::{
    Failure, FailureKind, Fallback, LoadRequest, PdfViewer, RenderOutcome, RenderRequest,
    RenderedPage, ViewerState,
};
