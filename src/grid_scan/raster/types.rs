//! Raster data types

use crate::grid_scan::common::error::{Result, ScanError};

/// Full-scale 16-bit intensity (pure white).
pub const WHITE: u16 = u16::MAX;

/// Single channel raster with 16-bit intensities, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl GrayRaster {
    /// Wraps a row-major buffer of 16-bit intensities.
    ///
    /// Fails with [`ScanError::InvalidRaster`] when the buffer length does not
    /// match `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u16>) -> Result<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(ScanError::InvalidRaster {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a raster from 8-bit gray samples, widening each `v` to `v * 257`.
    pub fn from_gray8(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        Self::new(width, height, data.iter().map(|&v| widen(v)).collect())
    }

    /// Raster where every pixel has the same intensity.
    pub fn filled(width: usize, height: usize, intensity: u16) -> Self {
        Self {
            width,
            height,
            data: vec![intensity; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u16] {
        &self.data
    }
}

/// 8-bit to 16-bit intensity, replicating the byte (`0xAB -> 0xABAB`).
#[inline]
pub fn widen(v: u8) -> u16 {
    u16::from(v) * 257
}
