//! # ESC/POS Text Commands
//!
//! Print modes, character size, alignment and horizontal positioning.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Print modes | ESC ! n | Bold, double height, double width in one byte |
//! | Character size | GS ! n | 1-8× height and width |
//! | Alignment | ESC a n | Left / center / right |
//! | Absolute position | ESC $ nL nH | Jump to dot column |
//! | Relative position | ESC \ nL nH | Move by signed dot offset |
//!
//! ## Character Width
//!
//! Font A is 12 dots wide per half-width glyph, 24 dots per full-width
//! (CJK) glyph. Double width and `GS !` width factors multiply this, which
//! is why the session tracks a horizontal character scale alongside the
//! bytes it emits.

use serde::Deserialize;

use super::commands::{ESC, GS, HT, i16_le, u16_le};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
///
/// Also used for the alignment of a layout column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Map the raw `ESC a` parameter to an alignment.
    ///
    /// ```
    /// use estampa::protocol::text::Alignment;
    ///
    /// assert_eq!(Alignment::from_raw(1), Some(Alignment::Center));
    /// assert_eq!(Alignment::from_raw(3), None);
    /// ```
    pub fn from_raw(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Left),
            1 => Some(Self::Center),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
///
/// Takes effect at the start of a line.
///
/// ```
/// use estampa::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// PRINT MODES AND CHARACTER SIZE
// ============================================================================

/// Bit flags of the `ESC !` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PrintModes {
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
}

impl PrintModes {
    /// Bit 3 = emphasized, bit 4 = double height, bit 5 = double width.
    pub fn bits(&self) -> u8 {
        let mut n = 0;
        if self.bold {
            n |= 1 << 3;
        }
        if self.double_height {
            n |= 1 << 4;
        }
        if self.double_width {
            n |= 1 << 5;
        }
        n
    }

    /// Horizontal character multiplier implied by these modes.
    pub fn char_scale(&self) -> u8 {
        if self.double_width { 2 } else { 1 }
    }
}

/// # Select Print Modes (ESC ! n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC ! n  |
/// | Hex     | 1B 21 n  |
///
/// ```
/// use estampa::protocol::text::{print_modes, PrintModes};
///
/// let modes = PrintModes { bold: true, double_height: false, double_width: true };
/// assert_eq!(print_modes(modes), vec![0x1B, 0x21, 0x28]);
/// ```
pub fn print_modes(modes: PrintModes) -> Vec<u8> {
    vec![ESC, b'!', modes.bits()]
}

/// # Select Character Size (GS ! n)
///
/// ## Parameters
///
/// - `height`: Vertical multiplier, clamped to 1-8
/// - `width`: Horizontal multiplier, clamped to 1-8
///
/// The low nibble carries `height - 1`, the high nibble `width - 1`.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS ! n   |
/// | Hex     | 1D 21 n  |
///
/// ```
/// use estampa::protocol::text::character_size;
///
/// assert_eq!(character_size(2, 2), vec![0x1D, 0x21, 0x11]);
/// assert_eq!(character_size(0, 9), vec![0x1D, 0x21, 0x70]);
/// ```
pub fn character_size(height: u8, width: u8) -> Vec<u8> {
    let h = height.clamp(1, 8) - 1;
    let w = width.clamp(1, 8) - 1;
    vec![GS, b'!', h | (w << 4)]
}

// ============================================================================
// HORIZONTAL POSITIONING
// ============================================================================

/// # Horizontal Tab (HT × n)
pub fn horizontal_tab(n: usize) -> Vec<u8> {
    vec![HT; n]
}

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves the print position to `n` dots from the start of the line.
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC $ nL nH    |
/// | Hex     | 1B 24 nL nH    |
pub fn absolute_position(n: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(n);
    vec![ESC, b'$', nl, nh]
}

/// # Set Relative Print Position (ESC \ nL nH)
///
/// Negative values move left.
pub fn relative_position(n: i16) -> Vec<u8> {
    let [nl, nh] = i16_le(n);
    vec![ESC, b'\\', nl, nh]
}

// ============================================================================
// TESTS
// ============================================================================
