//! # Page Mode Commands
//!
//! Page mode composes a print area with absolute positioning before
//! printing. Unlike standard mode where each line prints immediately, page
//! mode accumulates content and prints when explicitly commanded.
//!
//! ## Workflow
//!
//! 1. Enter page mode (`enter`)
//! 2. Define the print area (`print_area`)
//! 3. Set print direction (`direction`)
//! 4. Position and add content (`absolute_position` / `relative_position`)
//! 5. Print and exit (`print_and_exit`), or print and stay (`print`)

use super::commands::{CAN, ESC, FF, GS, i16_le, u16_le};

/// Page mode print direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PageDirection {
    /// Left to right, starting top-left
    #[default]
    LeftToRight = 0,
    /// Bottom to top, starting bottom-left
    BottomToTop = 1,
    /// Right to left, starting bottom-right
    RightToLeft = 2,
    /// Top to bottom, starting top-right
    TopToBottom = 3,
}

impl PageDirection {
    /// Map the raw `ESC T` parameter to a direction.
    pub fn from_raw(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::LeftToRight),
            1 => Some(Self::BottomToTop),
            2 => Some(Self::RightToLeft),
            3 => Some(Self::TopToBottom),
            _ => None,
        }
    }
}

/// Enter page mode.
///
/// **Command:** ESC L
pub fn enter() -> Vec<u8> {
    vec![ESC, b'L']
}

/// Set the page mode print area.
///
/// **Command:** ESC W xL xH yL yH dxL dxH dyL dyH
///
/// `x`, `y` is the top-left corner of the area, `width`, `height` its size,
/// all in motion units.
pub fn print_area(x: u16, y: u16, width: u16, height: u16) -> Vec<u8> {
    let [xl, xh] = u16_le(x);
    let [yl, yh] = u16_le(y);
    let [dxl, dxh] = u16_le(width);
    let [dyl, dyh] = u16_le(height);

    vec![ESC, b'W', xl, xh, yl, yh, dxl, dxh, dyl, dyh]
}

/// Set page mode print direction.
///
/// **Command:** ESC T n
pub fn direction(dir: PageDirection) -> Vec<u8> {
    vec![ESC, b'T', dir as u8]
}

/// Set absolute vertical print position in page mode.
///
/// **Command:** GS $ nL nH
pub fn absolute_position(n: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(n);
    vec![GS, b'$', nl, nh]
}

/// Set relative vertical print position in page mode.
///
/// **Command:** GS \ nL nH
pub fn relative_position(n: i16) -> Vec<u8> {
    let [nl, nh] = i16_le(n);
    vec![GS, b'\\', nl, nh]
}

/// Print the page and return to standard mode.
///
/// **Command:** FF
pub fn print_and_exit() -> Vec<u8> {
    vec![FF]
}

/// Print the page and stay in page mode.
///
/// **Command:** ESC FF
pub fn print() -> Vec<u8> {
    vec![ESC, FF]
}

/// Discard the page buffer and stay in page mode.
///
/// **Command:** CAN
pub fn clear() -> Vec<u8> {
    vec![CAN]
}

/// Discard the page buffer and return to standard mode.
///
/// **Command:** ESC S
pub fn exit() -> Vec<u8> {
    vec![ESC, b'S']
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_exit() {
        assert_eq!(enter(), vec![0x1B, 0x4C]);
        assert_eq!(exit(), vec![0x1B, 0x53]);
    }

    #[test]
    fn test_print_area() {
        let cmd = print_area(0, 0, 384, 800);
        assert_eq!(
            cmd,
            vec![
                0x1B, 0x57,
                0, 0,      // x = 0
                0, 0,      // y = 0
                0x80, 1,   // width = 384 (0x0180)
                0x20, 3,   // height = 800 (0x0320)
            ]
        );
    }

    #[test]
    fn test_direction() {
        assert_eq!(direction(PageDirection::LeftToRight), vec![0x1B, 0x54, 0]);
        assert_eq!(direction(PageDirection::TopToBottom), vec![0x1B, 0x54, 3]);
        assert_eq!(PageDirection::from_raw(4), None);
    }

    #[test]
    fn test_positions() {
        assert_eq!(absolute_position(160), vec![0x1D, 0x24, 160, 0]);
        assert_eq!(relative_position(-2), vec![0x1D, 0x5C, 0xFE, 0xFF]);
    }

    #[test]
    fn test_print_variants() {
        assert_eq!(print_and_exit(), vec![0x0C]);
        assert_eq!(print(), vec![0x1B, 0x0C]);
        assert_eq!(clear(), vec![0x18]);
    }
}
