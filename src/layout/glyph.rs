//! Glyph width classification
//!
//! Receipt fonts are monospaced in two widths: half-width glyphs (Latin,
//! punctuation, half-width katakana) take 12 dots at scale 1, full-width
//! glyphs (CJK, Hangul, full-width forms, symbols) take 24. The table below
//! approximates the printer's font without needing its metrics.

use std::cmp::Ordering;

/// Half-width glyph advance at scale 1, in dots
pub const NARROW: u16 = 12;

/// Full-width glyph advance at scale 1, in dots
pub const WIDE: u16 = 24;

/// Sorted, disjoint, inclusive code point ranges and their widths.
const GLYPH_WIDTHS: &[(u32, u32, u16)] = &[
    (0x0020, 0x036F, NARROW),
    (0x1100, 0x11FF, WIDE),
    (0x2010, 0x2010, WIDE),
    (0x2013, 0x2016, WIDE),
    (0x2018, 0x2019, WIDE),
    (0x201C, 0x201D, WIDE),
    (0x2025, 0x2026, WIDE),
    (0x2030, 0x2033, WIDE),
    (0x2035, 0x2035, WIDE),
    (0x203B, 0x203B, WIDE),
    (0x2460, 0x24FF, WIDE),
    (0x25A0, 0x27BF, WIDE),
    (0x2E80, 0x2FDF, WIDE),
    (0x3000, 0x318F, WIDE),
    (0x31A0, 0x31EF, WIDE),
    (0x3200, 0x9FFF, WIDE),
    (0xAC00, 0xD7FF, WIDE),
    (0xF900, 0xFAFF, WIDE),
    (0xFE30, 0xFE4F, WIDE),
    (0xFF01, 0xFF5E, WIDE),
    (0xFF61, 0xFF9F, NARROW),
    (0xFFE0, 0xFFE5, WIDE),
    (0x1F000, 0x1F9FF, WIDE),
];

/// Width of `c` in dots at scale 1, or `None` if the font has no glyph
/// class for it (control characters, most scripts outside CJK and Latin).
///
/// ```
/// use estampa::layout::glyph::glyph_width;
///
/// assert_eq!(glyph_width('A'), Some(12));
/// assert_eq!(glyph_width('中'), Some(24));
/// assert_eq!(glyph_width('\t'), None);
/// ```
pub fn glyph_width(c: char) -> Option<u16> {
    let cp = c as u32;
    GLYPH_WIDTHS
        .binary_search_by(|&(lo, hi, _)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| GLYPH_WIDTHS[idx].2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_and_disjoint() {
        for pair in GLYPH_WIDTHS.windows(2) {
            let (_, prev_hi, _) = pair[0];
            let (lo, hi, _) = pair[1];
            assert!(lo <= hi);
            assert!(prev_hi < lo, "overlap at U+{:04X}", lo);
        }
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(glyph_width('\u{001F}'), None);
        assert_eq!(glyph_width(' '), Some(NARROW));
        assert_eq!(glyph_width('\u{036F}'), Some(NARROW));
        assert_eq!(glyph_width('\u{0370}'), None);
        assert_eq!(glyph_width('\u{2010}'), Some(WIDE));
        assert_eq!(glyph_width('\u{2011}'), None);
        assert_eq!(glyph_width('\u{2012}'), None);
        assert_eq!(glyph_width('\u{2013}'), Some(WIDE));
        assert_eq!(glyph_width('\u{203B}'), Some(WIDE));
        assert_eq!(glyph_width('\u{FF60}'), None);
        assert_eq!(glyph_width('\u{FF61}'), Some(NARROW));
        assert_eq!(glyph_width('\u{FF9F}'), Some(NARROW));
        assert_eq!(glyph_width('\u{1F9FF}'), Some(WIDE));
        assert_eq!(glyph_width('\u{1FA00}'), None);
    }

    #[test]
    fn test_common_characters() {
        assert_eq!(glyph_width('a'), Some(NARROW));
        assert_eq!(glyph_width('é'), Some(NARROW));
        assert_eq!(glyph_width('，'), Some(WIDE)); // U+FF0C
        assert_eq!(glyph_width('한'), Some(WIDE));
        assert_eq!(glyph_width('。'), Some(WIDE)); // U+3002
        assert_eq!(glyph_width('ア'), Some(WIDE)); // U+30A2
        assert_eq!(glyph_width('ｱ'), Some(NARROW)); // U+FF71
        assert_eq!(glyph_width('\n'), None);
    }
}
