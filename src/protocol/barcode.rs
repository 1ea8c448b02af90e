//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcode and QR code commands.
//!
//! Both are multi-command sequences: a few setup commands (HRI position,
//! height, module size, error correction) followed by the data itself. The
//! `generate`/`barcode` helpers emit the complete sequence and clamp every
//! numeric parameter into the range the printer accepts. Empty data is not
//! a valid barcode: the helpers then return no bytes at all.
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use estampa::protocol::barcode::barcode1d::{self, BarcodeType, HriPosition};
//!
//! let cmd = barcode1d::barcode(HriPosition::Below, 80, 2, BarcodeType::Code128.into(), b"{B12345");
//! assert_eq!(&cmd[0..3], &[0x1D, 0x48, 0x02]);
//! ```
//!
//! ## QR Code Usage
//!
//! ```
//! use estampa::protocol::barcode::qr;
//!
//! let cmd = qr::generate(b"https://example.com", 4, 1);
//! assert_eq!(&cmd[0..9], &[0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x00, 0x00]);
//! ```

use super::commands::GS;

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// 1D Barcode command builders
pub mod barcode1d {
    use serde::Deserialize;

    use super::GS;

    /// Longest payload `GS k` function B can announce in its length byte
    pub const MAX_DATA_LEN: usize = 255;

    /// Barcode system codes for `GS k m n d1...dn` (function B)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
    #[serde(rename_all = "snake_case")]
    #[repr(u8)]
    pub enum BarcodeType {
        /// UPC-A (11-12 digits)
        UpcA = 65,
        /// UPC-E (6-8 digits)
        UpcE = 66,
        /// EAN-13 / JAN-13 (12-13 digits)
        Ean13 = 67,
        /// EAN-8 / JAN-8 (7-8 digits)
        Ean8 = 68,
        /// Code39 (A-Z, 0-9, space, -.$/%+)
        Code39 = 69,
        /// ITF (Interleaved 2 of 5, numeric pairs)
        Itf = 70,
        /// Codabar / NW-7
        Codabar = 71,
        /// Code93 (full ASCII)
        Code93 = 72,
        /// Code128 (full ASCII, data starts with a code set selector such as `{B`)
        #[default]
        Code128 = 73,
    }

    impl From<BarcodeType> for u8 {
        fn from(kind: BarcodeType) -> Self {
            kind as u8
        }
    }

    /// HRI (Human Readable Interpretation) position
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum HriPosition {
        /// No HRI text printed
        None = 0,
        /// HRI above barcode
        Above = 1,
        /// HRI below barcode (default)
        #[default]
        Below = 2,
        /// HRI both above and below
        Both = 3,
    }

    /// # Select HRI Print Position (GS H n)
    pub fn hri_position(pos: HriPosition) -> Vec<u8> {
        vec![GS, b'H', pos as u8]
    }

    /// # Select HRI Font (GS f n)
    ///
    /// Always font A.
    pub fn hri_font_a() -> Vec<u8> {
        vec![GS, b'f', 0]
    }

    /// # Set Barcode Height (GS h n)
    ///
    /// Height in dots, 1-255 (0 is raised to 1).
    pub fn height(n: u8) -> Vec<u8> {
        vec![GS, b'h', n.max(1)]
    }

    /// # Set Barcode Module Width (GS w n)
    ///
    /// Narrow bar width in dots, clamped to 1-6.
    pub fn module_width(n: u8) -> Vec<u8> {
        vec![GS, b'w', n.clamp(1, 6)]
    }

    /// # Print Barcode (GS k m n d1...dn)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k m n d1...dn |
    /// | Hex     | 1D 6B m n d1...dn |
    ///
    /// Data beyond 255 bytes is truncated.
    pub fn data(kind: u8, data: &[u8]) -> Vec<u8> {
        let data = &data[..data.len().min(MAX_DATA_LEN)];
        let mut cmd = Vec::with_capacity(4 + data.len());
        cmd.extend_from_slice(&[GS, b'k', kind, data.len() as u8]);
        cmd.extend_from_slice(data);
        cmd
    }

    /// Complete barcode sequence: HRI position, HRI font, height, module
    /// width, then the data command.
    ///
    /// Returns an empty vector when `data` is empty.
    ///
    /// ```
    /// use estampa::protocol::barcode::barcode1d::{barcode, BarcodeType, HriPosition};
    ///
    /// assert!(barcode(HriPosition::Below, 80, 2, BarcodeType::Code39.into(), b"").is_empty());
    /// ```
    pub fn barcode(hri: HriPosition, height_dots: u8, module: u8, kind: u8, payload: &[u8]) -> Vec<u8> {
        if payload.is_empty() {
            return Vec::new();
        }
        let mut cmd = Vec::with_capacity(16 + payload.len().min(MAX_DATA_LEN));
        cmd.extend(hri_position(hri));
        cmd.extend(hri_font_a());
        cmd.extend(height(height_dots));
        cmd.extend(module_width(module));
        cmd.extend(data(kind, payload));
        cmd
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k)
// ============================================================================

/// QR Code command builders
///
/// Every QR command shares the `GS ( k pL pH cn fn` frame with `cn = '1'`
/// (0x31). `pL pH` is the little-endian count of bytes that follow it.
pub mod qr {
    use super::GS;
    use crate::protocol::commands::u16_le;

    /// Longest payload whose `len + 3` still fits the two-byte length field
    pub const MAX_DATA_LEN: usize = u16::MAX as usize - 3;

    /// Function 165: select model.
    pub fn select_model() -> Vec<u8> {
        vec![GS, b'(', b'k', 0x04, 0x00, 0x31, 0x41, 0x00, 0x00]
    }

    /// Function 167: module size in dots, clamped to 1-16.
    pub fn module_size(n: u8) -> Vec<u8> {
        vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x43, n.clamp(1, 16)]
    }

    /// # Function 169: Error Correction Level
    ///
    /// | Level | n | Byte | Recovery |
    /// |-------|---|------|----------|
    /// | L | 0 | '0' | ~7% |
    /// | M | 1 | '1' | ~15% |
    /// | Q | 2 | '2' | ~25% |
    /// | H | 3 | '3' | ~30% |
    ///
    /// Levels above 3 are clamped to 3.
    pub fn error_correction(level: u8) -> Vec<u8> {
        vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x45, level.min(3) + b'0']
    }

    /// # Function 180: Store Data
    ///
    /// `pL pH` = data length + 3 (for `cn fn m`). Data beyond
    /// [`MAX_DATA_LEN`] bytes is truncated.
    pub fn store_data(data: &[u8]) -> Vec<u8> {
        let data = &data[..data.len().min(MAX_DATA_LEN)];
        let [pl, ph] = u16_le((data.len() + 3) as u16);
        let mut cmd = Vec::with_capacity(8 + data.len());
        cmd.extend_from_slice(&[GS, b'(', b'k', pl, ph, 0x31, 0x50, 0x30]);
        cmd.extend_from_slice(data);
        cmd
    }

    /// Function 181: print the stored symbol.
    pub fn print() -> Vec<u8> {
        vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x51, 0x30]
    }

    /// Complete five-command QR sequence: model, module size, error
    /// correction, store data, print.
    ///
    /// Returns an empty vector when `data` is empty.
    pub fn generate(data: &[u8], module: u8, ec_level: u8) -> Vec<u8> {
        if data.is_empty() {
            return Vec::new();
        }
        let mut cmd = Vec::with_capacity(41 + data.len().min(MAX_DATA_LEN));
        cmd.extend(select_model());
        cmd.extend(module_size(module));
        cmd.extend(error_correction(ec_level));
        cmd.extend(store_data(data));
        cmd.extend(print());
        cmd
    }
}

// ============================================================================
// TESTS
// ============================================================================
