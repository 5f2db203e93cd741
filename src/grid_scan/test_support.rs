//! Raster builders shared by the unit tests.

use crate::grid_scan::raster::GrayRaster;
use crate::grid_scan::raster::types::{WHITE, widen};

pub fn raster_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u16) -> GrayRaster {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    GrayRaster::new(width, height, data).expect("buffer matches dimensions")
}

/// Board of `cols x rows` cells, each `cell` pixels wide, separated and framed
/// by 1px white lines. `fill(col, row)` is the 8-bit gray of a cell's interior.
pub fn grid_raster(cell: usize, cols: usize, rows: usize, fill: impl Fn(usize, usize) -> u8) -> GrayRaster {
    let pitch = cell + 1;
    raster_from_fn(cols * pitch + 1, rows * pitch + 1, |x, y| {
        if x % pitch == 0 || y % pitch == 0 {
            WHITE
        } else {
            widen(fill(x / pitch, y / pitch))
        }
    })
}

pub fn is_strictly_increasing(coords: &[i64]) -> bool {
    coords.windows(2).all(|pair| pair[0] < pair[1])
}
