use crate::grid_scan::cells::types::CellRect;
use crate::grid_scan::common::error::{Result, ScanError};
use crate::grid_scan::raster::PixelSampler;

/// Darkness of `rect` in `0..=100`.
///
/// Averages the 8-bit intensity (high byte) over the rectangle. Pixels outside
/// the raster count as black. Fails with [`ScanError::DegenerateCell`] when the
/// rectangle holds no pixels.
pub fn score_cell<S: PixelSampler + ?Sized>(raster: &S, rect: &CellRect) -> Result<u8> {
    if rect.is_empty() {
        return Err(ScanError::DegenerateCell {
            min_x: rect.min_x,
            min_y: rect.min_y,
            max_x: rect.max_x,
            max_y: rect.max_y,
        });
    }

    let mut sum: u64 = 0;
    for y in rect.min_y..rect.max_y {
        for x in rect.min_x..rect.max_x {
            sum += u64::from(raster.intensity_at(x, y) >> 8);
        }
    }

    Ok(darkness_level(sum as f64 / rect.area() as f64))
}

/// Maps an 8-bit average intensity to `100 - round(100 * avg / 255)`.
///
/// Rounds half away from zero.
pub fn darkness_level(average: f64) -> u8 {
    let brightness = (100.0 * average / 255.0).round().clamp(0.0, 100.0) as u8;
    100 - brightness
}
