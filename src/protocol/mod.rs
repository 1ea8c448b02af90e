//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers. Every
//! builder is a pure function returning the exact bytes of one directive;
//! range checks against caller input live one layer up, in
//! [`PrinterSession`](crate::session::PrinterSession).
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes, init, feed, line spacing, cut
//! - [`text`]: Print modes, character size, alignment, positioning
//! - [`barcode`]: 1D barcodes and QR codes
//! - [`graphics`]: Raster bit images
//! - [`page`]: Page mode
//!
//! ## Usage Example
//!
//! ```
//! use estampa::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(b"RECEIPT");
//! data.extend(commands::line_feed(1));
//! data.extend(commands::cut(true));
//!
//! assert_eq!(&data[0..5], &[0x1B, 0x40, 0x1B, 0x61, 0x01]);
//! ```

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod page;
pub mod text;
