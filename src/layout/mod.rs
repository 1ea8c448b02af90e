//! # Multi-Column Text Layout
//!
//! Lays out several text streams side by side in fixed-width columns.
//!
//! ## Columns
//!
//! A [`ColumnSet`] holds up to [`MAX_COLUMNS`] slots, each a width in dots
//! plus an alignment. Configuring walks the requested specs left to right
//! against the remaining line width. A spec with width 0, or one wider than
//! what is left, becomes the last column and absorbs every remaining dot.
//!
//! ```text
//! 384 dots, specs [(100, Left), (0, Center)]
//!
//! ├──── 100 ────┼─────────────── 284 ───────────────┤
//! │ Left        │              Center               │
//! ```
//!
//! ## Wrapping
//!
//! [`wrap_rows`] turns one text per column into printable rows. Per row and
//! column it takes characters greedily until the next one would overflow
//! the column or a newline is reached (the newline is dropped). There is no
//! word-boundary back-off: receipts are monospaced tables, not prose.
//! Characters without a glyph class print as `?` at half width.

pub mod glyph;

use serde::Deserialize;
use tracing::trace;

use crate::protocol::text::Alignment;
use glyph::{NARROW, glyph_width};

/// Maximum number of columns per line
pub const MAX_COLUMNS: usize = 6;

/// Width and alignment of one column.
///
/// A width of 0 in a configuration request means "take whatever is left".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ColumnSpec {
    /// Width in dots
    pub width: u16,
    #[serde(default)]
    pub alignment: Alignment,
}

impl ColumnSpec {
    pub const fn new(width: u16, alignment: Alignment) -> Self {
        Self { width, alignment }
    }

    pub const fn left(width: u16) -> Self {
        Self::new(width, Alignment::Left)
    }

    pub const fn center(width: u16) -> Self {
        Self::new(width, Alignment::Center)
    }

    pub const fn right(width: u16) -> Self {
        Self::new(width, Alignment::Right)
    }
}

/// Configured column slots. An unused slot has width 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSet {
    slots: [ColumnSpec; MAX_COLUMNS],
}

impl ColumnSet {
    /// Replace the column configuration.
    ///
    /// The total width never exceeds `dots_per_line`. Specs past the first
    /// absorbing column, and past [`MAX_COLUMNS`], are dropped. An empty
    /// request leaves the current configuration untouched.
    ///
    /// ```
    /// use estampa::layout::{ColumnSet, ColumnSpec};
    ///
    /// let mut cols = ColumnSet::default();
    /// cols.configure(384, &[ColumnSpec::left(100), ColumnSpec::center(0)]);
    /// assert_eq!(cols.get(0), Some(ColumnSpec::left(100)));
    /// assert_eq!(cols.get(1), Some(ColumnSpec::center(284)));
    /// assert_eq!(cols.get(2), None);
    /// ```
    pub fn configure(&mut self, dots_per_line: u16, specs: &[ColumnSpec]) {
        if specs.is_empty() {
            return;
        }
        self.slots = [ColumnSpec::default(); MAX_COLUMNS];

        let mut remaining = dots_per_line;
        for (slot, spec) in self.slots.iter_mut().zip(specs) {
            if spec.width == 0 || spec.width > remaining {
                *slot = ColumnSpec::new(remaining, spec.alignment);
                return;
            }
            *slot = *spec;
            remaining -= spec.width;
        }
    }

    /// The configured column at `index`, if it has a non-zero width.
    pub fn get(&self, index: usize) -> Option<ColumnSpec> {
        self.slots.get(index).copied().filter(|spec| spec.width > 0)
    }

    /// Leading run of columns with a non-zero width.
    pub fn active(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.slots.iter().take_while(|spec| spec.width > 0)
    }

    /// Sum of all configured widths.
    pub fn total_width(&self) -> u32 {
        self.slots.iter().map(|spec| u32::from(spec.width)).sum()
    }
}

/// One column's share of a printed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Absolute print position in dots
    pub position: u16,
    /// Text to print, with unclassified characters replaced by `?`
    pub text: String,
    /// Dots the text occupies at the current scale
    pub used: u32,
}

/// One printed line: the cells of every column that still had text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Wrap `texts` into rows for the active columns of `columns`.
///
/// Texts beyond the active columns are ignored. Every row consumes at least
/// one character (or newline) from each column that still has text, so the
/// row count never exceeds the longest text's character count. A column
/// narrower than a single glyph still prints one glyph per row.
pub fn wrap_rows(columns: &ColumnSet, texts: &[&str], char_scale: u8) -> Vec<Row> {
    let specs: Vec<ColumnSpec> = columns.active().copied().take(texts.len()).collect();
    let mut remaining: Vec<&str> = texts[..specs.len()].to_vec();
    let scale = u32::from(char_scale.max(1));

    let mut rows = Vec::new();
    loop {
        let mut row = Row::default();
        let mut pos: u32 = 0;

        for (spec, rest) in specs.iter().zip(remaining.iter_mut()) {
            let width = u32::from(spec.width);
            if rest.is_empty() {
                pos += width;
                continue;
            }

            let (text, used, tail) = take_segment(rest, width, scale);
            *rest = tail;

            let offset = match spec.alignment {
                Alignment::Left => 0,
                Alignment::Center => width.saturating_sub(used) / 2,
                Alignment::Right => width.saturating_sub(used),
            };
            row.cells.push(Cell {
                position: (pos + offset) as u16,
                text,
                used,
            });
            pos += width;
        }

        if row.cells.is_empty() {
            break;
        }
        trace!(row = rows.len(), cells = row.cells.len(), "column row");
        rows.push(row);
    }
    rows
}

/// Take the next row segment from `rest`.
///
/// Returns the printable text, its width in dots, and the unconsumed tail.
fn take_segment(rest: &str, width: u32, scale: u32) -> (String, u32, &str) {
    let mut text = String::new();
    let mut used = 0;

    for (idx, c) in rest.char_indices() {
        if c == '\n' {
            return (text, used, &rest[idx + 1..]);
        }
        let (glyph, advance) = match glyph_width(c) {
            Some(w) => (c, u32::from(w) * scale),
            None => ('?', u32::from(NARROW) * scale),
        };
        if used + advance > width && !text.is_empty() {
            return (text, used, &rest[idx..]);
        }
        text.push(glyph);
        used += advance;
    }
    (text, used, "")
}
