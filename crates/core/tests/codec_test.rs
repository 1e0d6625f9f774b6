//! Tests for payload decoding and data URIs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hl7lens_core::ViewerError;
use hl7lens_core::codec::{DOWNLOAD_FILE_NAME, PDF_MIME_TYPE, decode, pdf_data_uri};

#[test]
fn test_decode_round_trip() {
    let samples: [&[u8]; 4] = [
        b"",
        b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n",
        &[0u8, 255, 1, 254, 2],
        b"%%EOF",
    ];
    for bytes in samples {
        let encoded = STANDARD.encode(bytes);
        assert_eq!(decode(&encoded).unwrap(), bytes, "round trip of {encoded:?}");
    }
}

#[test]
fn test_decode_all_byte_values() {
    let bytes: Vec<u8> = (0..=255).collect();
    assert_eq!(decode(&STANDARD.encode(&bytes)).unwrap(), bytes);
}

#[test]
fn test_decode_wrapped_lines() {
    let encoded = STANDARD.encode(b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n");
    let wrapped = format!("{}\r\n{}", &encoded[..16], &encoded[16..]);
    assert_eq!(decode(&wrapped).unwrap(), b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n");
}

#[test]
fn test_decode_discards_trailing_bits() {
    assert_eq!(decode("QR==").unwrap(), b"A");
    assert_eq!(decode("QR").unwrap(), b"A");
    assert_eq!(decode("JVBERi1").unwrap(), b"%PDF-");
}

#[test]
fn test_decode_rejects_non_alphabet() {
    assert!(matches!(decode("JVBE!i0x"), Err(ViewerError::Decode(_))));
}

#[test]
fn test_data_uri() {
    assert_eq!(PDF_MIME_TYPE, "application/pdf");
    assert_eq!(DOWNLOAD_FILE_NAME, "document.pdf");
    assert_eq!(
        pdf_data_uri("JVBERi0xLjQK"),
        "data:application/pdf;base64,JVBERi0xLjQK"
    );
}
