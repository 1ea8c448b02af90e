//! # Grayscale Conversion
//!
//! Pixel sources arrive as RGBA (4 bytes per pixel, row-major). The printer
//! only knows ink or no ink, so the first step is a luma approximation:
//!
//! ```text
//! gray = (11·R + 16·G + 5·B) >> 5
//! ```
//!
//! The weights sum to 32, so the shift keeps the result in 0-255. Alpha is
//! ignored: a transparent pixel converts by its color channels alone.

use std::path::Path;

use crate::error::{EstampaError, Result};

/// RGBA pixel source, 4 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbaFrame {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Decode an image file of any format the `image` crate supports.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref())
            .map_err(|e| EstampaError::Image(format!("Failed to open {}: {}", path.as_ref().display(), e)))?;
        Ok(Self::from_dynamic(&img))
    }

    /// Copy the pixels of a decoded image.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new(width as usize, height as usize, rgba.into_raw())
    }

    /// Convert to one gray byte per pixel.
    ///
    /// Fails with [`EstampaError::InvalidImageGeometry`] if either dimension
    /// is zero or `data` holds fewer than `width * height` RGBA pixels.
    pub fn to_gray(&self) -> Result<PixelBuffer> {
        let needed = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(4))
            .filter(|&len| len > 0 && self.data.len() >= len);
        let Some(needed) = needed else {
            return Err(EstampaError::InvalidImageGeometry {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            });
        };

        let gray = self.data[..needed]
            .chunks_exact(4)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect();
        PixelBuffer::new(self.width, self.height, gray)
    }
}

/// Luma approximation used for every pixel.
///
/// ```
/// use estampa::render::gray::luma;
///
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(0, 0, 0), 0);
/// assert_eq!(luma(255, 0, 0), 87);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((11 * u32::from(r) + 16 * u32::from(g) + 5 * u32::from(b)) >> 5) as u8
}

/// Row-major grayscale buffer, 0 = black, 255 = white.
///
/// Construction validates the geometry, so every `PixelBuffer` holds at
/// least `width * height` pixels with both dimensions non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let fits = width > 0
            && height > 0
            && width
                .checked_mul(height)
                .is_some_and(|needed| pixels.len() >= needed);
        if !fits {
            return Err(EstampaError::InvalidImageGeometry {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}
