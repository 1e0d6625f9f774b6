//! Tests for embedded PDF detection and masking.

use hl7lens_core::message::Segment;
use hl7lens_core::pdf::{PDF_PLACEHOLDER, PdfPayload, display_value, has_embedded_pdf, locate};

fn locate_in(raw: &str) -> Option<PdfPayload> {
    let segment = Segment::new(raw);
    locate(segment.segment_type(), segment.fields())
}

// === OBX-5 ===

#[test]
fn test_obx_encapsulated_data() {
    let payload = locate_in("OBX|1|ED|PDF^Report||^Application^PDF^^Base64^JVBERi0xLjQKJcfsj6IK|||||F")
        .expect("payload");
    assert_eq!(payload.source_field_index, 5);
    assert!(payload.base64.starts_with("JVBERi0xL"));
    assert_eq!(payload.base64, "JVBERi0xLjQKJcfsj6IK");
}

#[test]
fn test_obx_direct_base64_is_verbatim() {
    let payload = locate_in("OBX|1|ED|PDF||JVBERi0xLjQKexample").expect("payload");
    assert_eq!(payload, PdfPayload::new(5, "JVBERi0xLjQKexample"));
}

#[test]
fn test_obx_prefixed_component_without_marker() {
    let payload = locate_in("OBX|1|ED|PDF||LAB^JVBERi0xLjQK").expect("payload");
    assert_eq!(payload.base64, "JVBERi0xLjQK");
}

#[test]
fn test_obx_marker_with_unprefixed_data_uses_fourth_component() {
    let payload = locate_in("OBX|1|ED|PDF||Application^PDF^^Base64^AAAA").expect("payload");
    assert_eq!(payload.source_field_index, 5);
    assert_eq!(payload.base64, "Base64");
}

#[test]
fn test_obx_only_inspects_field_five() {
    assert!(locate_in("OBX|1|TX|JVBERi0xLjQK||plain text").is_none());
}

#[test]
fn test_obx_text_value_has_no_payload() {
    assert!(locate_in("OBX|1|TX|NOTE||Patient tolerated procedure well").is_none());
}

// === other segments ===

#[test]
fn test_non_obx_first_prefixed_field() {
    let payload = locate_in("ZDS|1|doc|JVBERi0xLjQKAAAA|JVBERi0xLjcK").expect("payload");
    assert_eq!(payload.source_field_index, 3);
    assert_eq!(payload.base64, "JVBERi0xLjQKAAAA");
}

#[test]
fn test_non_obx_ignores_components() {
    assert!(locate_in("ZDS|1|doc^JVBERi0xLjQK").is_none());
}

#[test]
fn test_has_embedded_pdf_quick_check() {
    let ed = Segment::new("OBX|1|ED|PDF||^Application^PDF^^Base64^");
    assert!(has_embedded_pdf(ed.fields()));
    let plain = Segment::new("PID|1||12345||DOE^JANE");
    assert!(!has_embedded_pdf(plain.fields()));
}

// === masking ===

#[test]
fn test_display_value_masks_payload_fields() {
    assert_eq!(display_value("ZDS", 3, "JVBERi0xLjQK"), PDF_PLACEHOLDER);
    assert_eq!(
        display_value("OBX", 5, "^Application^PDF^^Base64^JVBERi0xLjQK"),
        "[PDF Data - See viewer below]"
    );
    assert_eq!(display_value("OBX", 3, "PDF^Report"), "PDF^Report");
}
