//! # Print Jobs
//!
//! A job is a JSON description of a receipt: the paper width, the text
//! encoding and a list of operations replayed in order onto a
//! [`PrinterSession`].
//!
//! ```json
//! {
//!   "width": 384,
//!   "ops": [
//!     { "op": "align", "align": "center" },
//!     { "op": "modes", "bold": true, "double_width": true },
//!     { "op": "text", "content": "RECEIPT" },
//!     { "op": "columns", "columns": [{ "width": 240 }, { "width": 0, "alignment": "right" }] },
//!     { "op": "row", "cells": ["Coffee", "3.50"] },
//!     { "op": "qr", "data": "https://example.com" },
//!     { "op": "cut" }
//!   ]
//! }
//! ```
//!
//! Numeric directive parameters are passed through unchanged, so a job gets
//! exactly the clamping and skipping behavior of the session methods.
//! Image paths are resolved relative to a caller-supplied base directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::encoding::{GbkEncoder, TextEncoder, Utf8Encoder};
use crate::error::{EstampaError, Result};
use crate::layout::ColumnSpec;
use crate::protocol::barcode::barcode1d::{BarcodeType, HriPosition};
use crate::protocol::text::{Alignment, PrintModes};
use crate::render::{dither::DitheringAlgorithm, gray::RgbaFrame};
use crate::session::PrinterSession;

fn default_width() -> u32 {
    384
}

fn default_true() -> bool {
    true
}

fn default_one() -> usize {
    1
}

fn default_barcode_height() -> i32 {
    80
}

fn default_barcode_module() -> i32 {
    2
}

fn default_qr_module() -> i32 {
    4
}

fn default_qr_level() -> i32 {
    1
}

/// Text encoding for a job's text operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// GB2312/GBK (default)
    #[default]
    #[serde(alias = "gb2312")]
    Gbk,
    #[serde(alias = "utf-8")]
    Utf8,
}

/// Top-level job document.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Print head width in dots (384 or 576; anything else prints as 384).
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub encoding: TextEncoding,
    pub ops: Vec<Op>,
}

/// A single job operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Reset,
    /// Encoded text, followed by a line feed unless `newline` is false.
    Text {
        content: String,
        #[serde(default = "default_true")]
        newline: bool,
    },
    Feed {
        #[serde(default = "default_one")]
        lines: usize,
    },
    /// `ESC 3 n`, or `ESC 2` when `dots` is omitted.
    LineSpacing {
        #[serde(default)]
        dots: Option<i32>,
    },
    Align {
        align: Alignment,
    },
    Modes(PrintModes),
    Size {
        height: i32,
        width: i32,
    },
    Tab {
        #[serde(default = "default_one")]
        count: usize,
    },
    Position {
        dots: i32,
    },
    RelativePosition {
        dots: i32,
    },
    Columns {
        columns: Vec<ColumnSpec>,
    },
    Row {
        cells: Vec<String>,
    },
    DashedLine,
    Barcode {
        data: String,
        #[serde(default)]
        kind: BarcodeType,
        #[serde(default)]
        hri: HriPosition,
        #[serde(default = "default_barcode_height")]
        height: i32,
        #[serde(default = "default_barcode_module")]
        module: i32,
    },
    Qr {
        data: String,
        #[serde(default = "default_qr_module")]
        module: i32,
        #[serde(default = "default_qr_level")]
        level: i32,
    },
    Image {
        path: PathBuf,
        #[serde(default)]
        dither: DitheringAlgorithm,
    },
    /// Immediate cut, or a postponed cut when `feed` is given.
    Cut {
        #[serde(default)]
        partial: bool,
        #[serde(default)]
        feed: Option<i32>,
    },
    EnterPage,
    PrintArea {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    PageDirection {
        direction: i32,
    },
    PagePosition {
        dots: i32,
    },
    PageRelativePosition {
        dots: i32,
    },
    PrintPage,
    PrintAndExitPage,
    ClearPage,
    ExitPage,
}

impl Job {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a job file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the job into a finished byte stream.
    ///
    /// Relative image paths are resolved against `base_dir`.
    #[instrument(skip(self, base_dir), fields(width = self.width, ops = self.ops.len()))]
    pub fn render(&self, base_dir: &Path) -> Result<Vec<u8>> {
        let bytes = match self.encoding {
            TextEncoding::Gbk => {
                let mut session = PrinterSession::with_encoder(self.width, GbkEncoder);
                self.replay(&mut session, base_dir)?;
                session.into_bytes()
            }
            TextEncoding::Utf8 => {
                let mut session = PrinterSession::with_encoder(self.width, Utf8Encoder);
                self.replay(&mut session, base_dir)?;
                session.into_bytes()
            }
        };
        debug!(bytes = bytes.len(), "job rendered");
        Ok(bytes)
    }

    /// Apply every operation to `session` in order.
    ///
    /// Stops at the first failing operation; bytes of earlier operations
    /// stay in the session.
    pub fn replay<E: TextEncoder>(&self, session: &mut PrinterSession<E>, base_dir: &Path) -> Result<()> {
        for (index, op) in self.ops.iter().enumerate() {
            op.apply(session, base_dir)
                .map_err(|e| EstampaError::Job(format!("op {} ({}): {}", index, op.name(), e)))?;
        }
        Ok(())
    }
}

impl Op {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Reset => "reset",
            Op::Text { .. } => "text",
            Op::Feed { .. } => "feed",
            Op::LineSpacing { .. } => "line_spacing",
            Op::Align { .. } => "align",
            Op::Modes(_) => "modes",
            Op::Size { .. } => "size",
            Op::Tab { .. } => "tab",
            Op::Position { .. } => "position",
            Op::RelativePosition { .. } => "relative_position",
            Op::Columns { .. } => "columns",
            Op::Row { .. } => "row",
            Op::DashedLine => "dashed_line",
            Op::Barcode { .. } => "barcode",
            Op::Qr { .. } => "qr",
            Op::Image { .. } => "image",
            Op::Cut { .. } => "cut",
            Op::EnterPage => "enter_page",
            Op::PrintArea { .. } => "print_area",
            Op::PageDirection { .. } => "page_direction",
            Op::PagePosition { .. } => "page_position",
            Op::PageRelativePosition { .. } => "page_relative_position",
            Op::PrintPage => "print_page",
            Op::PrintAndExitPage => "print_and_exit_page",
            Op::ClearPage => "clear_page",
            Op::ExitPage => "exit_page",
        }
    }

    fn apply<E: TextEncoder>(&self, session: &mut PrinterSession<E>, base_dir: &Path) -> Result<()> {
        match self {
            Op::Reset => {
                session.reset();
            }
            Op::Text { content, newline } => {
                session.append_text(content);
                if *newline {
                    session.line_feed(1);
                }
            }
            Op::Feed { lines } => {
                session.line_feed(*lines);
            }
            Op::LineSpacing { dots: Some(n) } => {
                session.set_line_spacing(*n);
            }
            Op::LineSpacing { dots: None } => {
                session.default_line_spacing();
            }
            Op::Align { align } => {
                session.align(*align);
            }
            Op::Modes(modes) => {
                session.set_print_modes(modes.bold, modes.double_height, modes.double_width);
            }
            Op::Size { height, width } => {
                session.set_character_size(*height, *width);
            }
            Op::Tab { count } => {
                session.horizontal_tab(*count);
            }
            Op::Position { dots } => {
                session.set_absolute_position(*dots);
            }
            Op::RelativePosition { dots } => {
                session.set_relative_position(*dots);
            }
            Op::Columns { columns } => {
                session.configure_columns(columns);
            }
            Op::Row { cells } => {
                let texts: Vec<&str> = cells.iter().map(String::as_str).collect();
                session.print_columns(&texts);
            }
            Op::DashedLine => {
                let line = session.dashed_line();
                session.append_text(line).line_feed(1);
            }
            Op::Barcode {
                data,
                kind,
                hri,
                height,
                module,
            } => {
                session.append_barcode(*hri, *height, *module, *kind, data);
            }
            Op::Qr { data, module, level } => {
                session.append_qr_code(*module, *level, data);
            }
            Op::Image { path, dither } => {
                let frame = RgbaFrame::open(base_dir.join(path))?;
                session.append_image(&frame, *dither)?;
            }
            Op::Cut { partial, feed: None } => {
                session.cut(!partial);
            }
            Op::Cut {
                partial,
                feed: Some(n),
            } => {
                session.postponed_cut(!partial, *n);
            }
            Op::EnterPage => {
                session.enter_page_mode();
            }
            Op::PrintArea {
                x,
                y,
                width,
                height,
            } => {
                session.set_print_area(*x, *y, *width, *height);
            }
            Op::PageDirection { direction } => {
                session.set_print_direction(*direction);
            }
            Op::PagePosition { dots } => {
                session.set_absolute_position_in_page_mode(*dots);
            }
            Op::PageRelativePosition { dots } => {
                session.set_relative_position_in_page_mode(*dots);
            }
            Op::PrintPage => {
                session.print_in_page_mode();
            }
            Op::PrintAndExitPage => {
                session.print_and_exit_page_mode();
            }
            Op::ClearPage => {
                session.clear_in_page_mode();
            }
            Op::ExitPage => {
                session.exit_page_mode();
            }
        }
        Ok(())
    }
}
