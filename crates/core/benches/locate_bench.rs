//! Benchmarks for message parsing and PDF payload handling.
//!
//! Benchmark groups:
//! - `parse_message`: splitting and field decomposition at various segment counts
//! - `locate_payload`: payload detection over the two OBX conventions
//! - `decode_payload`: Base64 decoding at various payload sizes

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use hl7lens_core::codec;
use hl7lens_core::message::{Message, Segment};
use hl7lens_core::pdf;

// =============================================================================
// Data Generation
// =============================================================================

/// Fake PDF bytes of roughly `len` bytes.
fn generate_pdf_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    let mut i = 0u32;
    while bytes.len() < len {
        bytes.extend_from_slice(format!("{i} 0 obj\n<< /Length 0 >>\nendobj\n").as_bytes());
        i += 1;
    }
    bytes.truncate(len);
    bytes
}

/// ORU message with `n` segments: a header, a patient, then OBX text results.
fn generate_message(n: usize) -> String {
    let mut lines = vec![
        "MSH|^~\\&|LAB|HOSP|EMR|HOSP|202401011200||ORU^R01|MSG0001|P|2.5".to_string(),
        "PID|1||12345^^^HOSP^MR||DOE^JANE||19800101|F".to_string(),
    ];
    for i in 0..n.saturating_sub(2) {
        lines.push(format!("OBX|{}|NM|GLU^Glucose||{}|mg/dL|70-99||||F", i + 1, 80 + i % 40));
    }
    lines.join("\r\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_message");

    for segments in [10, 100, 1_000] {
        let text = generate_message(segments);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segments", segments), &text, |b, text| {
            b.iter(|| black_box(Message::parse(black_box(text))));
        });
    }

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_payload");
    let base64 = STANDARD.encode(generate_pdf_bytes(256 * 1024));

    let direct = Segment::new(&format!("OBX|1|ED|PDF||{base64}"));
    let encapsulated = Segment::new(&format!("OBX|1|ED|PDF||^Application^PDF^^Base64^{base64}"));
    let plain = Segment::new("OBX|1|NM|GLU^Glucose||95|mg/dL|70-99||||F");

    for (name, segment) in [
        ("direct", &direct),
        ("encapsulated", &encapsulated),
        ("none", &plain),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(pdf::locate(segment.segment_type(), black_box(segment.fields()))));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_payload");

    for kib in [16, 256, 2048] {
        let base64 = STANDARD.encode(generate_pdf_bytes(kib * 1024));
        group.throughput(Throughput::Bytes(base64.len() as u64));
        group.bench_with_input(BenchmarkId::new("kib", kib), &base64, |b, base64| {
            b.iter(|| black_box(codec::decode(black_box(base64))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_locate, bench_decode);
criterion_main!(benches);
