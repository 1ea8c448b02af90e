//! Text encoding for the printer's native character set
//!
//! The session never interprets text bytes: it hands each string to a
//! [`TextEncoder`] and appends whatever comes back. Chinese receipt
//! printers expect GB2312, which `encoding_rs` covers through its GBK
//! encoder (a strict superset).

use std::borrow::Cow;

use encoding_rs::EncoderResult;
use tracing::debug;

/// Byte written for a character the printer's character set lacks
pub const REPLACEMENT: u8 = b'?';

/// Converts Unicode text into the byte encoding the printer understands.
pub trait TextEncoder {
    fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]>;
}

/// GB2312/GBK encoder backed by `encoding_rs`.
///
/// Each character GBK cannot represent becomes a single `?`, so one
/// unmappable character never prints wider than a full-width glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GbkEncoder;

impl TextEncoder for GbkEncoder {
    fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        if text.is_ascii() {
            return Cow::Borrowed(text.as_bytes());
        }

        let mut encoder = encoding_rs::GBK.new_encoder();
        let mut out = Vec::with_capacity(text.len());
        let mut rest = text;
        let mut unmappable = 0usize;
        loop {
            let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
            rest = &rest[read..];
            match result {
                EncoderResult::InputEmpty => break,
                EncoderResult::OutputFull => out.reserve(rest.len().max(4)),
                EncoderResult::Unmappable(_) => {
                    out.push(REPLACEMENT);
                    unmappable += 1;
                }
            }
        }
        if unmappable > 0 {
            debug!(text, unmappable, "characters outside GBK replaced");
        }
        Cow::Owned(out)
    }
}

/// Pass-through encoder for printers configured for UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl TextEncoder for Utf8Encoder {
    fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        Cow::Borrowed(text.as_bytes())
    }
}
