//! # Image Rendering
//!
//! Turns an RGBA pixel source into a printable raster command:
//!
//! ```text
//! RgbaFrame ──to_gray──► PixelBuffer ──dither──► MonoBitmap ──raster──► GS v 0 …
//! ```
//!
//! - [`gray`]: RGBA to grayscale, geometry validation
//! - [`dither`]: threshold and error-diffusion dithering, bit packing
//!
//! ## Example
//!
//! ```
//! use estampa::render::{self, dither::DitheringAlgorithm, gray::RgbaFrame};
//!
//! // 1×1 light gray pixel
//! let frame = RgbaFrame::new(1, 1, vec![200, 200, 200, 255]);
//! let cmd = render::raster_command(&frame, DitheringAlgorithm::Threshold)?;
//! assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0, 0x00]);
//! # Ok::<(), estampa::EstampaError>(())
//! ```

pub mod dither;
pub mod gray;

use tracing::instrument;

use crate::error::{EstampaError, Result};
use crate::protocol::graphics;
use dither::{DitheringAlgorithm, MonoBitmap};
use gray::RgbaFrame;

/// Convert, dither and pack `frame` into a monochrome bitmap.
pub fn to_bitmap(frame: &RgbaFrame, algorithm: DitheringAlgorithm) -> Result<MonoBitmap> {
    let gray = frame.to_gray()?;
    Ok(dither::dither(&gray, algorithm))
}

/// Full pipeline: bitmap plus `GS v 0` header.
///
/// Fails without producing any bytes when the geometry is invalid or the
/// bitmap does not fit the 16-bit header fields.
#[instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn raster_command(frame: &RgbaFrame, algorithm: DitheringAlgorithm) -> Result<Vec<u8>> {
    let bitmap = to_bitmap(frame, algorithm)?;
    let (Ok(width_bytes), Ok(height)) = (
        u16::try_from(bitmap.width_bytes),
        u16::try_from(bitmap.height),
    ) else {
        return Err(EstampaError::InvalidImageGeometry {
            width: frame.width,
            height: frame.height,
            len: frame.data.len(),
        });
    };
    Ok(graphics::raster(width_bytes, height, &bitmap.bits))
}
