use crate::grid_scan::raster::types::GrayRaster;

/// Read-only access to per-pixel intensity.
///
/// Intensities are 16-bit; the 8-bit value is the high byte.
pub trait PixelSampler {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Intensity at `(x, y)`. Callers keep coordinates inside the raster.
    fn intensity(&self, x: usize, y: usize) -> u16;

    /// Intensity at signed coordinates; anything outside the raster reads as black.
    fn intensity_at(&self, x: i64, y: i64) -> u16 {
        if x < 0 || y < 0 {
            return 0;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return 0;
        }
        self.intensity(x, y)
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl PixelSampler for GrayRaster {
    #[inline]
    fn width(&self) -> usize {
        GrayRaster::width(self)
    }

    #[inline]
    fn height(&self) -> usize {
        GrayRaster::height(self)
    }

    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u16 {
        self.data()[y * GrayRaster::width(self) + x]
    }
}
