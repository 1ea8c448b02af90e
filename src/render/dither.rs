//! # Dithering
//!
//! Converts a grayscale [`PixelBuffer`] into a packed 1-bit [`MonoBitmap`].
//!
//! ## Algorithms
//!
//! | Algorithm | Cost | Character |
//! |-----------|------|-----------|
//! | Threshold | O(w·h), stateless | Hard edges, banding on gradients |
//! | Error diffusion | O(w·h), two row buffers | Preserves average tone, fine grain |
//!
//! Both decide a pixel is black when its value is below 128.
//!
//! ## Error Diffusion
//!
//! Each pixel's quantization error (value minus 0 for black, minus 255 for
//! white) is pushed onto neighbours that have not been visited yet:
//!
//! ```text
//!              ┌───────┬───────┐
//!              │   X   │ 7/16  │
//!      ┌───────┼───────┼───────┤
//!      │ 3/16  │ 5/16  │ 1/16  │
//!      └───────┴───────┴───────┘
//! ```
//!
//! The south-west, south and south-east shares are rounded to the nearest
//! sixteenth with `(err·k + 8) >> 4`. The east neighbour receives whatever
//! is left, so the four shares always sum to exactly `err`. Shares that
//! would land outside the image are dropped.

use serde::Deserialize;

use super::gray::PixelBuffer;

/// Gray values below this print black.
pub const THRESHOLD: i32 = 128;

/// Dithering algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DitheringAlgorithm {
    /// Fixed cutoff, each pixel independent of its neighbours
    #[default]
    Threshold,
    /// Floyd-Steinberg style error diffusion
    #[serde(alias = "diffuse", alias = "diffusion")]
    ErrorDiffusion,
}

/// Packed monochrome bitmap, MSB-first, 1 = black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    /// Bytes per row, `ceil(width / 8)`
    pub width_bytes: usize,
    pub height: usize,
    pub bits: Vec<u8>,
}

impl MonoBitmap {
    /// All-white bitmap for `width` × `height` pixels.
    pub fn blank(width: usize, height: usize) -> Self {
        let width_bytes = width.div_ceil(8);
        Self {
            width_bytes,
            height,
            bits: vec![0; width_bytes * height],
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width_bytes;
        &self.bits[start..start + self.width_bytes]
    }

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width_bytes;
        &mut self.bits[start..start + self.width_bytes]
    }

    /// Whether pixel `(x, y)` is black.
    #[inline]
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        self.row(y)[x / 8] & (0x80 >> (x % 8)) != 0
    }
}

/// Pack a row of boolean pixel values into bytes.
///
/// - Bit 7 (MSB) = leftmost pixel
/// - 1 = black (print dot), 0 = white (no dot)
///
/// If the row length is not a multiple of 8, the last byte is padded
/// with zeros (white) on the right.
///
/// ```
/// use estampa::render::dither::pack_row;
///
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];
    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            bytes[i / 8] |= 0x80 >> (i % 8);
        }
    }
    bytes
}

/// Dither `image` with the selected algorithm.
pub fn dither(image: &PixelBuffer, algorithm: DitheringAlgorithm) -> MonoBitmap {
    match algorithm {
        DitheringAlgorithm::Threshold => threshold(image),
        DitheringAlgorithm::ErrorDiffusion => error_diffusion(image),
    }
}

/// Whether a single gray value prints black under threshold dithering.
#[inline]
pub fn is_black(value: u8) -> bool {
    i32::from(value) < THRESHOLD
}

/// Threshold dithering: every pixel below 128 is black.
pub fn threshold(image: &PixelBuffer) -> MonoBitmap {
    let mut bitmap = MonoBitmap::blank(image.width(), image.height());
    for y in 0..image.height() {
        let row: Vec<bool> = image.row(y).iter().map(|&v| is_black(v)).collect();
        bitmap.row_mut(y).copy_from_slice(&pack_row(&row));
    }
    bitmap
}

/// Quantization error split across the four diffusion neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorShares {
    pub east: i32,
    pub south_west: i32,
    pub south: i32,
    pub south_east: i32,
}

impl ErrorShares {
    /// Split `err` into sixteenths; east takes the rounding remainder.
    ///
    /// ```
    /// use estampa::render::dither::ErrorShares;
    ///
    /// let s = ErrorShares::split(100);
    /// assert_eq!((s.south_west, s.south, s.south_east), (19, 31, 6));
    /// assert_eq!(s.east, 44);
    /// assert_eq!(s.total(), 100);
    /// ```
    #[inline]
    pub fn split(err: i32) -> Self {
        let south_west = (err * 3 + 8) >> 4;
        let south = (err * 5 + 8) >> 4;
        let south_east = (err + 8) >> 4;
        Self {
            east: err - (south_west + south + south_east),
            south_west,
            south,
            south_east,
        }
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.east + self.south_west + self.south + self.south_east
    }
}

/// Error diffusion dithering with two rolling row buffers.
pub fn error_diffusion(image: &PixelBuffer) -> MonoBitmap {
    let (width, height) = (image.width(), image.height());
    let mut bitmap = MonoBitmap::blank(width, height);

    let mut current: Vec<i32> = image.row(0).iter().map(|&v| i32::from(v)).collect();
    let mut next: Vec<i32> = vec![0; width];

    for y in 0..height {
        let has_next = y + 1 < height;
        if has_next {
            for (dst, &src) in next.iter_mut().zip(image.row(y + 1)) {
                *dst = i32::from(src);
            }
        }

        let out = bitmap.row_mut(y);
        for x in 0..width {
            let value = current[x];
            let err = if value < THRESHOLD {
                out[x / 8] |= 0x80 >> (x % 8);
                value
            } else {
                value - 255
            };

            let shares = ErrorShares::split(err);
            let has_east = x + 1 < width;
            if has_east {
                current[x + 1] += shares.east;
            }
            if has_next {
                next[x] += shares.south;
                if x > 0 {
                    next[x - 1] += shares.south_west;
                }
                if has_east {
                    next[x + 1] += shares.south_east;
                }
            }
        }

        std::mem::swap(&mut current, &mut next);
    }

    bitmap
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: usize, height: usize, pixels: Vec<u8>) -> PixelBuffer {
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_pack_row() {
        assert_eq!(pack_row(&[true; 8]), vec![0xFF]);
        assert_eq!(pack_row(&[false; 8]), vec![0x00]);
        assert_eq!(
            pack_row(&[true, false, true, false, true, false, true, false]),
            vec![0xAA]
        );
        assert_eq!(pack_row(&[true; 9]), vec![0xFF, 0x80]);
        assert_eq!(pack_row(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_threshold_single_white_pixel() {
        let bm = threshold(&buffer(1, 1, vec![200]));
        assert_eq!(bm.width_bytes, 1);
        assert_eq!(bm.bits, vec![0x00]);
    }

    #[test]
    fn test_threshold_cutoff() {
        let bm = threshold(&buffer(4, 1, vec![0, 127, 128, 255]));
        assert_eq!(bm.bits, vec![0b1100_0000]);
    }

    #[test]
    fn test_threshold_is_per_pixel() {
        // same value prints the same no matter what surrounds it
        let a = threshold(&buffer(3, 1, vec![0, 100, 0]));
        let b = threshold(&buffer(3, 1, vec![255, 100, 255]));
        assert!(a.is_black(1, 0));
        assert!(b.is_black(1, 0));
        for v in 0..=255u8 {
            assert_eq!(is_black(v), v < 128);
        }
    }

    #[test]
    fn test_threshold_row_stride() {
        let bm = threshold(&buffer(10, 2, vec![0; 20]));
        assert_eq!(bm.width_bytes, 2);
        assert_eq!(bm.bits, vec![0xFF, 0xC0, 0xFF, 0xC0]);
    }

    #[test]
    fn test_error_shares_conserve() {
        for err in -255..=255 {
            let s = ErrorShares::split(err);
            assert_eq!(s.total(), err, "shares of {} leak", err);
        }
    }

    #[test]
    fn test_error_shares_negative() {
        let s = ErrorShares::split(-127);
        assert_eq!(s.south_west, -24);
        assert_eq!(s.south, -40);
        assert_eq!(s.south_east, -8);
        assert_eq!(s.east, -55);
    }

    #[test]
    fn test_diffusion_extremes() {
        let black = error_diffusion(&buffer(9, 3, vec![0; 27]));
        assert!(black.bits.chunks(2).all(|r| r == [0xFF, 0x80]));

        let white = error_diffusion(&buffer(9, 3, vec![255; 27]));
        assert!(white.bits.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_diffusion_single_pixel() {
        assert_eq!(error_diffusion(&buffer(1, 1, vec![127])).bits, vec![0x80]);
        assert_eq!(error_diffusion(&buffer(1, 1, vec![128])).bits, vec![0x00]);
    }

    #[test]
    fn test_diffusion_carries_error_east() {
        // 100 is black, err 100, east gets 44: 100 + 44 = 144 -> white
        let bm = error_diffusion(&buffer(2, 1, vec![100, 100]));
        assert_eq!(bm.bits, vec![0b1000_0000]);
    }

    #[test]
    fn test_diffusion_mid_gray_density() {
        let (w, h) = (64, 64);
        let bm = error_diffusion(&buffer(w, h, vec![128; w * h]));
        let black: u32 = bm.bits.iter().map(|b| b.count_ones()).sum();
        let ratio = black as f32 / (w * h) as f32;
        assert!(ratio > 0.4 && ratio < 0.6, "got {}", ratio);
    }

    #[test]
    fn test_diffusion_3x2_exact() {
        // (0,0)=100 black, err 100: E 44, S 31, SE 6, SW dropped at x=0
        // (1,0)=244 white, err -11: E -5, SW -2, S -3, SE -1
        // (2,0)=45 black, err 45: SW 8, S 14, E and SE dropped at last column
        // row 1 becomes [179, 101, 193]; 179 white pushes -33 east, 68 prints black
        let bm = error_diffusion(&buffer(3, 2, vec![100, 200, 50, 150, 90, 180]));
        assert_eq!(bm.bits, vec![0b1010_0000, 0b0100_0000]);
    }

    /// Straightforward full-image Floyd-Steinberg with the same rounding.
    fn diffuse_full_buffer(width: usize, height: usize, pixels: &[u8]) -> Vec<bool> {
        let mut buf: Vec<i32> = pixels.iter().map(|&v| i32::from(v)).collect();
        let mut black = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                black[i] = buf[i] < THRESHOLD;
                let err = if black[i] { buf[i] } else { buf[i] - 255 };
                let s = ErrorShares::split(err);
                if x + 1 < width {
                    buf[i + 1] += s.east;
                }
                if y + 1 < height {
                    let below = i + width;
                    if x > 0 {
                        buf[below - 1] += s.south_west;
                    }
                    buf[below] += s.south;
                    if x + 1 < width {
                        buf[below + 1] += s.south_east;
                    }
                }
            }
        }
        black
    }

    #[test]
    fn test_diffusion_matches_full_buffer() {
        let mut seed: u32 = 0x1234_5678;
        for (w, h) in [(1, 1), (7, 5), (9, 3), (17, 11), (64, 40)] {
            let pixels: Vec<u8> = (0..w * h)
                .map(|_| {
                    seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    (seed >> 16) as u8
                })
                .collect();
            let bm = error_diffusion(&buffer(w, h, pixels.clone()));
            let expected = diffuse_full_buffer(w, h, &pixels);
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(bm.is_black(x, y), expected[y * w + x], "{}x{} at ({}, {})", w, h, x, y);
                }
            }
        }
    }

    #[test]
    fn test_dither_dispatch() {
        let img = buffer(2, 1, vec![100, 100]);
        assert_eq!(dither(&img, DitheringAlgorithm::Threshold).bits, vec![0xC0]);
        assert_eq!(dither(&img, DitheringAlgorithm::ErrorDiffusion).bits, vec![0x80]);
    }
}
