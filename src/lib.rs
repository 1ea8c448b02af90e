//! # Estampa - ESC/POS Receipt Compiler
//!
//! Estampa turns high-level print directives into the exact byte stream an
//! ESC/POS thermal receipt printer consumes. It provides:
//!
//! - **Protocol implementation**: pure command builders for text, barcodes,
//!   QR codes, raster images and page mode
//! - **Column layout**: fixed-width multi-column text with greedy wrapping
//!   and CJK-aware glyph widths
//! - **Image encoding**: grayscale conversion, threshold and error-diffusion
//!   dithering, MSB-first bit packing
//! - **Sessions and jobs**: a chainable encoder per receipt, and JSON jobs
//!   replayed onto it
//!
//! Estampa does no I/O with the printer. Callers send the finished bytes
//! over whatever transport they have.
//!
//! ## Quick Start
//!
//! ```
//! use estampa::{PrinterSession, layout::ColumnSpec};
//! use estampa::render::{dither::DitheringAlgorithm, gray::RgbaFrame};
//!
//! let mut session = PrinterSession::new(576);
//! session
//!     .reset()
//!     .set_alignment(1)
//!     .append_text("Thank you")
//!     .line_feed(1)
//!     .configure_columns(&[ColumnSpec::left(400), ColumnSpec::right(0)])
//!     .print_columns(&["Noodles", "18.00"]);
//!
//! let logo = RgbaFrame::new(16, 2, vec![0; 16 * 2 * 4]);
//! session.append_image(&logo, DitheringAlgorithm::ErrorDiffusion)?;
//! session.cut(false);
//!
//! let bytes = session.into_bytes();
//! assert_eq!(&bytes[..5], &[0x1B, 0x52, 0x0F, 0x1B, 0x40]);
//! # Ok::<(), estampa::EstampaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`buffer`] | Output byte stream |
//! | [`encoding`] | Text encoders (GBK, UTF-8) |
//! | [`layout`] | Column configuration and wrapping |
//! | [`render`] | Grayscale, dithering, raster images |
//! | [`printer`] | Paper width configurations |
//! | [`session`] | The per-receipt encoder |
//! | [`job`] | JSON print jobs |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! 58mm (384 dots) and 80mm (576 dots) ESC/POS printers at 203 DPI with a
//! GB2312 character set. Other widths are printed as 58mm.

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod job;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use error::EstampaError;
pub use printer::PrinterConfig;
pub use session::PrinterSession;
