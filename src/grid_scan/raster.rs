//! Raster input module
//!
//! Grayscale raster storage, the pixel sampling seam the scanners read through,
//! and decoding of encoded images into rasters.

mod reader;
mod image_reader;
mod sampler;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::RasterReader;
pub use image_reader::{ImageRasterReader, gray_raster_from_image};
pub use sampler::PixelSampler;
pub use types::GrayRaster;
