//! # ESC/POS Basic Commands
//!
//! Control-byte constants plus the directives that do not belong to a more
//! specific group: initialization, paper feed, line spacing, cutting and
//! international character set selection.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `HT`, `FF`, `CAN`
//! - Two bytes: `ESC @`, `ESC 2`, `ESC L`
//! - With parameters: `ESC 3 n`, `GS V m n`, `ESC $ nL nH`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, barcodes, QR codes, raster graphics and cutting.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// FF (Form Feed) - In page mode: print the page and return to standard mode
pub const FF: u8 = 0x0C;

/// CAN (Cancel) - In page mode: discard the page buffer
pub const CAN: u8 = 0x18;

/// International character set used by GB2312 printers (ESC R 15)
pub const CHARSET_CHINA: u8 = 15;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Restores default settings: line spacing, print modes, character size,
/// alignment. Stateless: always the same two bytes.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use estampa::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Select International Character Set (ESC R n)
///
/// Session preamble for GB2312 printers is `ESC R 15`.
#[inline]
pub fn international_charset(n: u8) -> Vec<u8> {
    vec![ESC, b'R', n]
}

// ============================================================================
// PAPER FEED AND LINE SPACING
// ============================================================================

/// # Print and Line Feed (LF × n)
///
/// Prints the line buffer and feeds `n` lines. `n = 0` produces nothing.
pub fn line_feed(n: usize) -> Vec<u8> {
    vec![LF; n]
}

/// # Restore Default Line Spacing (ESC 2)
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets line spacing to `n` motion units.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Cut Paper (GS V m)
///
/// | Cut     | m    | Hex      |
/// |---------|------|----------|
/// | Full    | '0'  | 1D 56 30 |
/// | Partial | '1'  | 1D 56 31 |
#[inline]
pub fn cut(full: bool) -> Vec<u8> {
    vec![GS, b'V', if full { b'0' } else { b'1' }]
}

/// # Feed and Cut Paper (GS V m n)
///
/// The cutter does not fire until `76 + n` dot lines have been fed, so the
/// last printed line clears the blade.
///
/// | Cut     | m    | Hex         |
/// |---------|------|-------------|
/// | Full    | 'a'  | 1D 56 61 n  |
/// | Partial | 'b'  | 1D 56 62 n  |
#[inline]
pub fn postponed_cut(full: bool, n: u8) -> Vec<u8> {
    vec![GS, b'V', if full { b'a' } else { b'b' }, n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use estampa::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Encode an i16 value as two's complement little-endian bytes
#[inline]
pub const fn i16_le(value: i16) -> [u8; 2] {
    u16_le(value as u16)
}

// ============================================================================
// TESTS
// ============================================================================
