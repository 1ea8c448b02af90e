//! # Output Byte Stream
//!
//! Append-only accumulator for the finished command stream. Every directive
//! a [`PrinterSession`](crate::session::PrinterSession) issues ends up here;
//! nothing is ever removed or rewritten, so the stream length only grows.
//!
//! ```
//! use estampa::buffer::ByteStream;
//!
//! let mut out = ByteStream::new();
//! out.extend(&[0x1B, 0x40]);
//! out.push(0x0A);
//! assert_eq!(out.as_bytes(), &[0x1B, 0x40, 0x0A]);
//! assert_eq!(out.to_hex(), "1b400a");
//! ```

use std::fmt::Write as _;

/// Append-only byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteStream {
    bytes: Vec<u8>,
}

impl ByteStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(4096),
        }
    }

    /// Append a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append a byte slice verbatim.
    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the accumulated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the stream and return the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Render the stream as lowercase hex, see [`to_hex`].
    pub fn to_hex(&self) -> String {
        to_hex(&self.bytes)
    }
}

/// Lowercase hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(hex, "{:02x}", b);
    }
    hex
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<ByteStream> for Vec<u8> {
    fn from(stream: ByteStream) -> Self {
        stream.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let out = ByteStream::new();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
        assert_eq!(out.to_hex(), "");
    }

    #[test]
    fn test_append_only_growth() {
        let mut out = ByteStream::new();
        out.extend(&[0x1B, 0x40]);
        let before = out.len();
        out.extend(&[]);
        assert_eq!(out.len(), before);
        out.push(0x0A);
        assert_eq!(out.len(), before + 1);
        assert_eq!(out.as_bytes(), &[0x1B, 0x40, 0x0A]);
    }

    #[test]
    fn test_hex_pads_single_digits() {
        let mut out = ByteStream::new();
        out.extend(&[0x00, 0x0F, 0xA0, 0xFF]);
        assert_eq!(out.to_hex(), "000fa0ff");
    }
}
