//! # Printer Session
//!
//! A [`PrinterSession`] is the long-lived encoder for one receipt. Each call
//! appends the bytes of one directive to the session's output; the finished
//! stream is handed to whatever transport the caller uses.
//!
//! The session carries the little state the protocol needs on the host
//! side: the paper width (fixed at construction), the horizontal character
//! scale (changed by print mode and size directives, used for column
//! arithmetic) and the column configuration.
//!
//! ## Parameter Handling
//!
//! Simple directives take raw integers and behave like the printer would:
//! values outside the directive's range are clamped, or the directive is
//! skipped entirely. Nothing is reported to the caller beyond a `debug!`
//! log line. Image encoding is the exception: a malformed raster header
//! would desynchronize the printer, so bad geometry is an error.
//!
//! ## Example
//!
//! ```
//! use estampa::{PrinterSession, layout::ColumnSpec};
//! use estampa::protocol::barcode::barcode1d::{BarcodeType, HriPosition};
//!
//! let mut session = PrinterSession::new(384);
//! session
//!     .set_alignment(1)
//!     .set_print_modes(true, true, true)
//!     .append_text("RECEIPT")
//!     .line_feed(1)
//!     .set_print_modes(false, false, false)
//!     .set_alignment(0)
//!     .configure_columns(&[ColumnSpec::left(240), ColumnSpec::right(0)])
//!     .print_columns(&["Coffee", "3.50"])
//!     .append_barcode(HriPosition::Below, 60, 2, BarcodeType::Code39, "A123")
//!     .append_qr_code(4, 1, "https://example.com")
//!     .postponed_cut(false, 0);
//!
//! let bytes = session.into_bytes();
//! assert_eq!(&bytes[0..3], &[0x1B, 0x52, 0x0F]);
//! ```

use tracing::{debug, instrument};

use crate::buffer::ByteStream;
use crate::encoding::{GbkEncoder, TextEncoder};
use crate::error::Result;
use crate::layout::{self, ColumnSet, ColumnSpec};
use crate::printer::PrinterConfig;
use crate::protocol::barcode::{barcode1d, barcode1d::HriPosition, qr};
use crate::protocol::page::{self, PageDirection};
use crate::protocol::text::{self, Alignment, PrintModes};
use crate::protocol::commands;
use crate::render::{self, dither::DitheringAlgorithm, gray::RgbaFrame};

/// Encoder state for one print job.
#[derive(Debug, Clone)]
pub struct PrinterSession<E = GbkEncoder> {
    config: PrinterConfig,
    char_scale: u8,
    columns: ColumnSet,
    out: ByteStream,
    encoder: E,
}

impl PrinterSession<GbkEncoder> {
    /// Create a session for a print head `dots_per_line` dots wide, encoding
    /// text as GB2312/GBK.
    ///
    /// Only 384 and 576 dots are supported; anything else becomes 384. The
    /// output starts with `ESC R 15` (Chinese character set).
    pub fn new(dots_per_line: u32) -> Self {
        Self::with_encoder(dots_per_line, GbkEncoder)
    }
}

impl<E: TextEncoder> PrinterSession<E> {
    /// Create a session with a custom text encoder.
    pub fn with_encoder(dots_per_line: u32, encoder: E) -> Self {
        let config = PrinterConfig::from_dots(dots_per_line);
        if u32::from(config.width_dots) != dots_per_line {
            debug!(
                requested = dots_per_line,
                using = config.name,
                "unsupported print width"
            );
        }
        let mut out = ByteStream::new();
        out.extend(&commands::international_charset(commands::CHARSET_CHINA));
        Self {
            config,
            char_scale: 1,
            columns: ColumnSet::default(),
            out,
            encoder,
        }
    }

    // === State ===

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Physical print width in dots.
    pub fn dots_per_line(&self) -> u16 {
        self.config.width_dots
    }

    /// Current horizontal character multiplier.
    pub fn char_scale(&self) -> u8 {
        self.char_scale
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Full-width dashed rule for this paper width.
    pub fn dashed_line(&self) -> &'static str {
        self.config.dashed_line
    }

    // === Output ===

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.out.as_bytes()
    }

    /// Output rendered as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.out.to_hex()
    }

    /// Consume the session and return the finished byte stream.
    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }

    #[inline]
    fn emit(&mut self, bytes: &[u8]) -> &mut Self {
        self.out.extend(bytes);
        self
    }

    // === Basic Commands ===

    /// `ESC @`: restore default settings. Also resets the character scale.
    pub fn reset(&mut self) -> &mut Self {
        self.char_scale = 1;
        self.emit(&commands::init())
    }

    /// `ESC 2`
    pub fn default_line_spacing(&mut self) -> &mut Self {
        self.emit(&commands::default_line_spacing())
    }

    /// `ESC 3 n`, skipped unless `n` is 0-255.
    pub fn set_line_spacing(&mut self, n: i32) -> &mut Self {
        match u8::try_from(n) {
            Ok(n) => self.emit(&commands::line_spacing(n)),
            Err(_) => skipped(self, "line spacing", n),
        }
    }

    /// `LF` × n
    pub fn line_feed(&mut self, n: usize) -> &mut Self {
        self.emit(&commands::line_feed(n))
    }

    /// `GS V 0` (full) or `GS V 1` (partial)
    pub fn cut(&mut self, full: bool) -> &mut Self {
        self.emit(&commands::cut(full))
    }

    /// `GS V a n` / `GS V b n`, skipped unless `n` is 0-255.
    pub fn postponed_cut(&mut self, full: bool, n: i32) -> &mut Self {
        match u8::try_from(n) {
            Ok(n) => self.emit(&commands::postponed_cut(full, n)),
            Err(_) => skipped(self, "postponed cut", n),
        }
    }

    // === Text ===

    /// Append text through the session's encoder.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        let bytes = self.encoder.encode(text);
        self.out.extend(&bytes);
        self
    }

    /// `ESC ! n`. Double width sets the character scale to 2, otherwise 1.
    pub fn set_print_modes(&mut self, bold: bool, double_height: bool, double_width: bool) -> &mut Self {
        let modes = PrintModes {
            bold,
            double_height,
            double_width,
        };
        self.char_scale = modes.char_scale();
        self.emit(&text::print_modes(modes))
    }

    /// `GS ! n` with both factors clamped to 1-8. The width factor becomes
    /// the character scale.
    pub fn set_character_size(&mut self, height: i32, width: i32) -> &mut Self {
        let h = height.clamp(1, 8) as u8;
        let w = width.clamp(1, 8) as u8;
        if height != i32::from(h) || width != i32::from(w) {
            debug!(height, width, "character size clamped");
        }
        self.char_scale = w;
        self.emit(&text::character_size(h, w))
    }

    /// `HT` × n
    pub fn horizontal_tab(&mut self, n: usize) -> &mut Self {
        self.emit(&text::horizontal_tab(n))
    }

    /// `ESC $ nL nH`, skipped unless `n` is 0-65535.
    pub fn set_absolute_position(&mut self, n: i32) -> &mut Self {
        match u16::try_from(n) {
            Ok(n) => self.emit(&text::absolute_position(n)),
            Err(_) => skipped(self, "absolute position", n),
        }
    }

    /// `ESC \ nL nH`, skipped unless `n` is -32768..=32767.
    pub fn set_relative_position(&mut self, n: i32) -> &mut Self {
        match i16::try_from(n) {
            Ok(n) => self.emit(&text::relative_position(n)),
            Err(_) => skipped(self, "relative position", n),
        }
    }

    /// `ESC a n`, skipped unless `n` is 0, 1 or 2.
    pub fn set_alignment(&mut self, n: i32) -> &mut Self {
        match u8::try_from(n).ok().and_then(Alignment::from_raw) {
            Some(alignment) => self.align(alignment),
            None => skipped(self, "alignment", n),
        }
    }

    /// `ESC a n` from a typed alignment.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.emit(&text::align(alignment))
    }

    // === Columns ===

    /// Replace the column configuration. See [`ColumnSet::configure`].
    pub fn configure_columns(&mut self, specs: &[ColumnSpec]) -> &mut Self {
        self.columns.configure(self.config.width_dots, specs);
        self
    }

    /// Print one text per configured column, wrapping each into as many
    /// rows as it needs. Every row is positioned with `ESC $` per cell and
    /// ends with a line feed.
    pub fn print_columns(&mut self, texts: &[&str]) -> &mut Self {
        let rows = layout::wrap_rows(&self.columns, texts, self.char_scale);
        for row in &rows {
            for cell in &row.cells {
                self.emit(&text::absolute_position(cell.position));
                self.append_text(&cell.text);
            }
            self.line_feed(1);
        }
        self
    }

    // === Barcodes ===

    /// 1D barcode. Height is clamped to 1-255, module size to 1-6, data to
    /// 255 bytes. Empty `data` emits nothing.
    pub fn append_barcode(
        &mut self,
        hri: HriPosition,
        height: i32,
        module_size: i32,
        kind: impl Into<u8>,
        data: &str,
    ) -> &mut Self {
        if data.is_empty() {
            debug!("barcode without data, skipped");
            return self;
        }
        let height = height.clamp(1, 255) as u8;
        let module = module_size.clamp(1, 6) as u8;
        self.emit(&barcode1d::barcode(hri, height, module, kind.into(), data.as_bytes()))
    }

    /// QR code. Module size is clamped to 1-16, error correction level to
    /// 0-3. Empty `data` emits nothing.
    pub fn append_qr_code(&mut self, module_size: i32, ec_level: i32, data: &str) -> &mut Self {
        if data.is_empty() {
            debug!("QR code without data, skipped");
            return self;
        }
        let module = module_size.clamp(1, 16) as u8;
        let level = ec_level.clamp(0, 3) as u8;
        self.emit(&qr::generate(data.as_bytes(), module, level))
    }

    // === Images ===

    /// Dither `frame` and append it as a `GS v 0` raster image.
    ///
    /// Fails with [`EstampaError::InvalidImageGeometry`](crate::EstampaError::InvalidImageGeometry)
    /// and leaves the output untouched if the frame has a zero dimension or
    /// too few pixels.
    #[instrument(skip(self, frame), fields(width = frame.width, height = frame.height))]
    pub fn append_image(&mut self, frame: &RgbaFrame, algorithm: DitheringAlgorithm) -> Result<&mut Self> {
        let cmd = render::raster_command(frame, algorithm)?;
        Ok(self.emit(&cmd))
    }

    // === Page Mode ===

    /// `ESC L`
    pub fn enter_page_mode(&mut self) -> &mut Self {
        self.emit(&page::enter())
    }

    /// `ESC W`, skipped unless every field is 0-65535.
    pub fn set_print_area(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let fields = (
            u16::try_from(x),
            u16::try_from(y),
            u16::try_from(width),
            u16::try_from(height),
        );
        match fields {
            (Ok(x), Ok(y), Ok(w), Ok(h)) => self.emit(&page::print_area(x, y, w, h)),
            _ => {
                debug!(x, y, width, height, "print area out of range, skipped");
                self
            }
        }
    }

    /// `ESC T n`, skipped unless `n` is 0-3.
    pub fn set_print_direction(&mut self, n: i32) -> &mut Self {
        match u8::try_from(n).ok().and_then(PageDirection::from_raw) {
            Some(dir) => self.emit(&page::direction(dir)),
            None => skipped(self, "print direction", n),
        }
    }

    /// `GS $ nL nH`, skipped unless `n` is 0-65535.
    pub fn set_absolute_position_in_page_mode(&mut self, n: i32) -> &mut Self {
        match u16::try_from(n) {
            Ok(n) => self.emit(&page::absolute_position(n)),
            Err(_) => skipped(self, "page absolute position", n),
        }
    }

    /// `GS \ nL nH`, skipped unless `n` is -32768..=32767.
    pub fn set_relative_position_in_page_mode(&mut self, n: i32) -> &mut Self {
        match i16::try_from(n) {
            Ok(n) => self.emit(&page::relative_position(n)),
            Err(_) => skipped(self, "page relative position", n),
        }
    }

    /// `FF`: print the page and return to standard mode.
    pub fn print_and_exit_page_mode(&mut self) -> &mut Self {
        self.emit(&page::print_and_exit())
    }

    /// `ESC FF`: print the page and stay in page mode.
    pub fn print_in_page_mode(&mut self) -> &mut Self {
        self.emit(&page::print())
    }

    /// `CAN`: discard the page and stay in page mode.
    pub fn clear_in_page_mode(&mut self) -> &mut Self {
        self.emit(&page::clear())
    }

    /// `ESC S`: discard the page and return to standard mode.
    pub fn exit_page_mode(&mut self) -> &mut Self {
        self.emit(&page::exit())
    }
}

fn skipped<'s, E>(session: &'s mut PrinterSession<E>, directive: &str, value: i32) -> &'s mut PrinterSession<E> {
    debug!(directive, value, "directive skipped");
    session
}
