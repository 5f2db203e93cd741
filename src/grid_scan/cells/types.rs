//! Cell and finding types

use serde::{Deserialize, Serialize};

/// Half-open pixel rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl CellRect {
    /// Interior of the cell bounded by four grid lines; the lines on the
    /// leading edges are excluded.
    pub fn between_lines(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            min_x: left + 1,
            min_y: top + 1,
            max_x: right,
            max_y: bottom,
        }
    }

    pub fn width(&self) -> u64 {
        (self.max_x - self.min_x).max(0) as u64
    }

    pub fn height(&self) -> u64 {
        (self.max_y - self.min_y).max(0) as u64
    }

    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

/// One lattice cell: column `x`, row `y` and its sampling rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
    pub rect: CellRect,
}

/// A cell whose darkness level met the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
    /// Darkness in `0..=100`, 100 being black
    pub level: u8,
}

/// Response body listing the flagged cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub mines: Vec<Finding>,
}

impl From<Vec<Finding>> for ScanReport {
    fn from(mines: Vec<Finding>) -> Self {
        Self { mines }
    }
}
