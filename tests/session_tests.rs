//! # Session Tests
//!
//! End-to-end checks of the public API: exact byte sequences for the
//! directives a receipt is made of, JSON jobs against the equivalent
//! hand-written session, and image files decoded through the `image` crate.

use estampa::job::Job;
use estampa::layout::ColumnSpec;
use estampa::protocol::barcode::barcode1d::{BarcodeType, HriPosition};
use estampa::protocol::text::Alignment;
use estampa::render::dither::DitheringAlgorithm;
use estampa::render::gray::RgbaFrame;
use estampa::{EstampaError, PrinterSession};
use pretty_assertions::assert_eq;
use std::path::Path;

const PREAMBLE: [u8; 3] = [0x1B, 0x52, 0x0F];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Bytes emitted after the session preamble.
fn body(session: &PrinterSession) -> &[u8] {
    &session.as_bytes()[PREAMBLE.len()..]
}

/// Hand-written equivalent of `src/fixtures/receipt.json`.
fn fixture_by_hand() -> Vec<u8> {
    let mut s = PrinterSession::new(384);
    let dashes = s.dashed_line();
    s.reset()
        .align(Alignment::Center)
        .set_print_modes(true, true, true)
        .append_text("小店")
        .line_feed(1)
        .set_print_modes(false, false, false)
        .append_text("Order #1024")
        .line_feed(1)
        .align(Alignment::Left)
        .append_text(dashes)
        .line_feed(1)
        .configure_columns(&[
            ColumnSpec::left(192),
            ColumnSpec::center(72),
            ColumnSpec::right(0),
        ])
        .print_columns(&["Item", "Qty", "Price"])
        .print_columns(&["Coffee", "2", "7.00"])
        .print_columns(&["牛肉面", "1", "18.00"])
        .print_columns(&["Seasonal fruit platter", "1", "25.50"])
        .append_text(dashes)
        .line_feed(1)
        .configure_columns(&[ColumnSpec::left(192), ColumnSpec::right(0)])
        .set_character_size(2, 2)
        .print_columns(&["TOTAL", "50.50"])
        .set_character_size(1, 1)
        .line_feed(1)
        .align(Alignment::Center)
        .append_barcode(HriPosition::Below, 60, 2, BarcodeType::Code128, "{B1024")
        .append_qr_code(5, 1, "https://example.com/o/1024")
        .line_feed(3)
        .postponed_cut(true, 0);
    s.into_bytes()
}

// ============================================================================
// SESSION
// ============================================================================

#[test]
fn test_new_session_has_only_preamble() {
    for dots in [384, 576, 0, 1000] {
        assert_eq!(PrinterSession::new(dots).as_bytes(), &PREAMBLE);
    }
}

#[test]
fn test_length_never_decreases() {
    let mut s = PrinterSession::new(384);
    let mut last = s.len();
    let mut check = |s: &PrinterSession| {
        assert!(s.len() >= last);
        last = s.len();
    };

    s.set_alignment(7);
    check(&s);
    s.append_text("");
    check(&s);
    s.append_barcode(HriPosition::None, 10, 2, BarcodeType::Itf, "");
    check(&s);
    s.print_columns(&[]);
    check(&s);
    s.cut(true);
    check(&s);
    let _ = s.append_image(&RgbaFrame::new(0, 5, vec![]), DitheringAlgorithm::Threshold);
    check(&s);
}

#[test]
fn test_alignment_bytes() {
    let mut s = PrinterSession::new(384);
    s.set_alignment(0).set_alignment(1).set_alignment(2).set_alignment(3).set_alignment(-1);
    assert_eq!(body(&s), &[0x1B, 0x61, 0, 0x1B, 0x61, 1, 0x1B, 0x61, 2]);
}

#[test]
fn test_reset_twice() {
    let mut s = PrinterSession::new(384);
    s.reset().reset();
    assert_eq!(body(&s), &[0x1B, 0x40, 0x1B, 0x40]);
}

#[test]
fn test_configure_two_columns_on_58mm() {
    let mut s = PrinterSession::new(384);
    s.configure_columns(&[ColumnSpec::left(100), ColumnSpec::center(0)]);
    let widths: Vec<u16> = s.columns().active().map(|c| c.width).collect();
    assert_eq!(widths, vec![100, 284]);
    assert_eq!(s.columns().get(1).map(|c| c.alignment), Some(Alignment::Center));
}

#[test]
fn test_columns_never_exceed_paper() {
    let mut s = PrinterSession::new(576);
    s.configure_columns(&[ColumnSpec::left(500), ColumnSpec::left(500), ColumnSpec::left(10)]);
    assert_eq!(s.columns().total_width(), 576);
    assert_eq!(s.columns().active().count(), 2);
}

#[test]
fn test_wrapped_row_count_is_bounded() {
    let mut s = PrinterSession::new(384);
    s.configure_columns(&[ColumnSpec::left(60), ColumnSpec::right(0)]);
    let long = "abcdefghijklmnopqrstuvwxyz";
    s.print_columns(&[long, "1"]);
    let feeds = body(&s).iter().filter(|&&b| b == 0x0A).count();
    // five narrow glyphs per 60-dot row
    assert_eq!(feeds, 6);
    assert!(feeds <= long.chars().count());
}

#[test]
fn test_empty_barcode_and_qr() {
    let mut s = PrinterSession::new(384);
    let before = s.len();
    s.append_barcode(HriPosition::Below, 80, 2, BarcodeType::Code39, "")
        .append_qr_code(3, 2, "");
    assert_eq!(s.len(), before);
}

#[test]
fn test_qr_store_length() {
    let mut s = PrinterSession::new(384);
    s.append_qr_code(4, 1, "TEST");
    let bytes = body(&s);
    let store = bytes
        .windows(3)
        .position(|w| w == [0x31, 0x50, 0x30])
        .map(|i| i - 5)
        .unwrap();
    assert_eq!(&bytes[store..store + 5], &[0x1D, 0x28, 0x6B, 0x07, 0x00]);
    let ec = bytes.windows(2).position(|w| w == [0x31, 0x45]).unwrap();
    assert_eq!(bytes[ec + 2], 0x31);
}

#[test]
fn test_image_single_light_pixel() {
    let mut s = PrinterSession::new(384);
    s.append_image(&RgbaFrame::new(1, 1, vec![200, 200, 200, 255]), DitheringAlgorithm::Threshold)
        .unwrap();
    assert_eq!(body(&s), &[0x1D, 0x76, 0x30, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn test_image_bad_geometry_is_error() {
    let mut s = PrinterSession::new(384);
    for frame in [
        RgbaFrame::new(0, 1, vec![0; 4]),
        RgbaFrame::new(1, 0, vec![0; 4]),
        RgbaFrame::new(3, 3, vec![0; 4 * 8]),
    ] {
        assert!(matches!(
            s.append_image(&frame, DitheringAlgorithm::ErrorDiffusion),
            Err(EstampaError::InvalidImageGeometry { .. })
        ));
    }
    assert_eq!(s.as_bytes(), &PREAMBLE);
}

#[test]
fn test_image_row_layout() {
    // 12 px wide: 2 bytes per row, left half black
    let mut pixels = Vec::new();
    for _ in 0..2 {
        pixels.extend([0, 0, 0, 255].repeat(6));
        pixels.extend([255, 255, 255, 255].repeat(6));
    }
    let mut s = PrinterSession::new(384);
    s.append_image(&RgbaFrame::new(12, 2, pixels), DitheringAlgorithm::Threshold)
        .unwrap();
    assert_eq!(
        body(&s),
        &[0x1D, 0x76, 0x30, 0x00, 2, 0, 2, 0, 0xFC, 0x00, 0xFC, 0x00]
    );
}

// ============================================================================
// JOBS
// ============================================================================

#[test]
fn test_fixture_matches_hand_written_session() {
    let job = Job::from_json(include_str!("../src/fixtures/receipt.json")).unwrap();
    let rendered = job.render(Path::new(".")).unwrap();
    assert_eq!(rendered, fixture_by_hand());
}

#[test]
fn test_fixture_header_bytes() {
    let job = Job::from_json(include_str!("../src/fixtures/receipt.json")).unwrap();
    let rendered = job.render(Path::new(".")).unwrap();
    assert_eq!(
        &rendered[..16],
        &[
            0x1B, 0x52, 0x0F, // Chinese charset
            0x1B, 0x40, // reset
            0x1B, 0x61, 0x01, // center
            0x1B, 0x21, 0x38, // bold, double height, double width
            0xD0, 0xA1, 0xB5, 0xEA, // 小店
            0x0A,
        ]
    );
    assert_eq!(&rendered[rendered.len() - 4..], &[0x1D, 0x56, 0x61, 0x00]);
}

#[test]
fn test_job_with_image_file() {
    let dir = std::env::temp_dir().join(format!("estampa-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::from_pixel(9, 2, image::Rgba([0, 0, 0, 255]))
        .save(dir.join("bar.png"))
        .unwrap();

    let job = Job::from_json(
        r#"{ "ops": [{ "op": "image", "path": "bar.png", "dither": "diffusion" }] }"#,
    )
    .unwrap();
    let rendered = job.render(&dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(
        &rendered[PREAMBLE.len()..],
        &[0x1D, 0x76, 0x30, 0x00, 2, 0, 2, 0, 0xFF, 0x80, 0xFF, 0x80]
    );
}
