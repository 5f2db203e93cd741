//! Raster reader backed by the `image` crate.
//!
//! Only PNG is accepted; other encodings fail with `DecodeError` even when
//! `image` could decode them. Non-gray inputs are reduced to 8-bit luma with fixed-point
//! Rec. 601 weights, then widened back to 16 bits.

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::grid_scan::common::error::{Result, ScanError};
use crate::grid_scan::raster::reader::RasterReader;
use crate::grid_scan::raster::types::{GrayRaster, widen};

/// Decodes encoded image bytes into a [`GrayRaster`].
pub struct ImageRasterReader;

impl RasterReader for ImageRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<GrayRaster> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| ScanError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        gray_raster_from_image(&decoded)
    }
}

/// Converts a decoded image to an 8-bit-quantized gray raster.
///
/// 8-bit gray images are taken as-is. Everything else goes through
/// alpha-premultiplied 16-bit RGB and `(19595 r + 38470 g + 7471 b + 2^15) >> 24`.
pub fn gray_raster_from_image(img: &DynamicImage) -> Result<GrayRaster> {
    let width = img.width() as usize;
    let height = img.height() as usize;

    if let DynamicImage::ImageLuma8(gray) = img {
        return GrayRaster::from_gray8(width, height, gray.as_raw());
    }

    let data = img
        .to_rgba16()
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            widen(luma8(premultiply(r, a), premultiply(g, a), premultiply(b, a)))
        })
        .collect();

    GrayRaster::new(width, height, data)
}

#[inline]
fn premultiply(channel: u16, alpha: u16) -> u32 {
    u32::from(channel) * u32::from(alpha) / 0xffff
}

#[inline]
fn luma8(r: u32, g: u32, b: u32) -> u8 {
    // Weights sum to 1 << 16, so the result always fits in a byte.
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}
