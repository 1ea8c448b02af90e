//! # Printer Configuration
//!
//! Hardware specifications of the two supported paper widths.
//!
//! | Paper | Width (dots) | Dashed rule |
//! |-------|--------------|-------------|
//! | 58mm  | 384 | 32 dashes |
//! | 80mm  | 576 | 47 dashes |
//!
//! Both print at 203 DPI with 12-dot half-width glyphs.
//!
//! ## Usage
//!
//! ```
//! use estampa::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_dots(576);
//! assert_eq!(config.name, "80mm");
//!
//! // anything else falls back to 58mm
//! assert_eq!(PrinterConfig::from_dots(500), PrinterConfig::MM58);
//! ```

/// Paper width specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Paper name
    pub name: &'static str,

    /// Print width in dots
    pub width_dots: u16,

    /// Full-width rule of dashes
    pub dashed_line: &'static str,
}

impl PrinterConfig {
    /// 58mm paper, 384 dots
    pub const MM58: Self = Self {
        name: "58mm",
        width_dots: 384,
        dashed_line: "--------------------------------",
    };

    /// 80mm paper, 576 dots
    ///
    /// The rule is 47 dashes: one short of the line so the printer does not
    /// wrap it onto an empty second line.
    pub const MM80: Self = Self {
        name: "80mm",
        width_dots: 576,
        dashed_line: "-----------------------------------------------",
    };

    /// Configuration for a physical width in dots.
    ///
    /// Only 384 and 576 are supported; any other value falls back to
    /// [`MM58`](Self::MM58).
    pub fn from_dots(dots: u32) -> Self {
        match dots {
            576 => Self::MM80,
            _ => Self::MM58,
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::MM58
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_line_fits_width() {
        // 12-dot half-width dashes never exceed the line
        for config in [PrinterConfig::MM58, PrinterConfig::MM80] {
            assert!(config.dashed_line.len() * 12 <= usize::from(config.width_dots));
            assert!(config.dashed_line.bytes().all(|b| b == b'-'));
        }
    }

    #[test]
    fn test_from_dots() {
        assert_eq!(PrinterConfig::from_dots(384), PrinterConfig::MM58);
        assert_eq!(PrinterConfig::from_dots(576), PrinterConfig::MM80);
        assert_eq!(PrinterConfig::from_dots(0), PrinterConfig::MM58);
        assert_eq!(PrinterConfig::from_dots(577), PrinterConfig::MM58);
    }

    #[test]
    fn test_dashed_line_lengths() {
        assert_eq!(PrinterConfig::MM58.dashed_line.len(), 32);
        assert_eq!(PrinterConfig::MM80.dashed_line.len(), 47);
    }

    #[test]
    fn test_default_is_58mm() {
        assert_eq!(PrinterConfig::default().width_dots, 384);
    }
}
