//! hl7lens - HL7 v2 message inspection with inline viewing of embedded PDFs.
//!
//! Messages are split into segments and pipe-delimited fields, fields are
//! labelled from a static dictionary, and Base64 PDFs carried in segments
//! (typically OBX-5) are located, decoded and paged through a pluggable
//! renderer.
//!
//! # Example
//!
//! ```
//! use hl7lens_core::message::Message;
//! use hl7lens_core::pdf::locate;
//!
//! let msg = Message::parse("MSH|^~\\&|LAB\rOBX|1|ED|PDF||JVBERi0xLjQK");
//! let obx = &msg.segments()[1];
//! let payload = locate(obx.segment_type(), obx.fields()).unwrap();
//! assert_eq!(payload.source_field_index, 5);
//! ```

pub mod app;
pub mod codec;
pub mod dictionary;
pub mod error;
pub mod message;
pub mod options;
pub mod pdf;
pub mod viewer;

pub use app::{FieldRow, SegmentDetails, SegmentSummary, ViewerApp};
pub use error::{Result, ViewerError};
pub use options::{ViewerOptions, Viewport};
