//! Line scan configuration and boundary types

use crate::grid_scan::raster::PixelSampler;

/// Pixels sampled along a line before it is accepted as white.
pub const DEFAULT_SAMPLE_CAP: usize = 1000;

/// Orientation of the separator lines a scan looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal lines, indexed by `y`.
    Rows,
    /// Vertical lines, indexed by `x`.
    Columns,
}

impl Axis {
    /// Number of candidate lines along this axis.
    pub fn line_count<S: PixelSampler + ?Sized>(self, raster: &S) -> usize {
        match self {
            Axis::Rows => raster.height(),
            Axis::Columns => raster.width(),
        }
    }

    /// Number of pixels on each line.
    pub fn line_length<S: PixelSampler + ?Sized>(self, raster: &S) -> usize {
        match self {
            Axis::Rows => raster.width(),
            Axis::Columns => raster.height(),
        }
    }

    /// Pixel `position` along line `index`.
    #[inline]
    pub fn sample<S: PixelSampler + ?Sized>(self, raster: &S, index: usize, position: usize) -> u16 {
        match self {
            Axis::Rows => raster.intensity(position, index),
            Axis::Columns => raster.intensity(index, position),
        }
    }
}

/// Predicate a pixel must satisfy for its line to count as white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whiteness {
    /// At least [`Whiteness::TOLERANT_MIN`], i.e. 8-bit 255.
    Tolerant,
    /// Exactly `u16::MAX`.
    Strict,
}

impl Whiteness {
    pub const TOLERANT_MIN: u16 = 0xff00;

    #[inline]
    pub fn accepts(self, intensity: u16) -> bool {
        match self {
            Whiteness::Tolerant => intensity >= Self::TOLERANT_MIN,
            Whiteness::Strict => intensity == u16::MAX,
        }
    }
}

/// Where the forward scan resumes after the seed line at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedScan {
    /// Resume right after the seed boundary: index 1 when line 0 is white,
    /// index 0 (examined again) when the seed is the virtual `-1`.
    Revisit,
    /// Always resume at index 1.
    Skip,
}

impl SeedScan {
    pub fn resume_at(self, seed: i64) -> i64 {
        match self {
            SeedScan::Revisit => seed + 1,
            SeedScan::Skip => 1,
        }
    }
}

/// Raster extent used as the closing boundary of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingEdge {
    Width,
    Height,
}

impl TrailingEdge {
    pub fn extent<S: PixelSampler + ?Sized>(self, raster: &S) -> usize {
        match self {
            TrailingEdge::Width => raster.width(),
            TrailingEdge::Height => raster.height(),
        }
    }
}

/// Full parameter set for one boundary scan.
///
/// Rows and columns use different predicates and seed handling; use
/// [`LineScan::rows`] and [`LineScan::columns`] for the stock behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    pub axis: Axis,
    pub whiteness: Whiteness,
    pub seed: SeedScan,
    pub sample_cap: usize,
    pub trailing_edge: TrailingEdge,
}

impl LineScan {
    /// Horizontal separators: tolerant whiteness, revisiting seed, and a list
    /// closed by the raster *width*.
    pub fn rows() -> Self {
        Self {
            axis: Axis::Rows,
            whiteness: Whiteness::Tolerant,
            seed: SeedScan::Revisit,
            sample_cap: DEFAULT_SAMPLE_CAP,
            trailing_edge: TrailingEdge::Width,
        }
    }

    /// Vertical separators: strict whiteness, scan always resumes at index 1.
    pub fn columns() -> Self {
        Self {
            axis: Axis::Columns,
            whiteness: Whiteness::Strict,
            seed: SeedScan::Skip,
            sample_cap: DEFAULT_SAMPLE_CAP,
            trailing_edge: TrailingEdge::Width,
        }
    }

    pub fn with_sample_cap(mut self, sample_cap: usize) -> Self {
        self.sample_cap = sample_cap;
        self
    }

    pub fn with_trailing_edge(mut self, edge: TrailingEdge) -> Self {
        self.trailing_edge = edge;
        self
    }
}

/// Strictly increasing grid-line coordinates along one axis.
///
/// Entry `i` and `i + 1` bound cell `i`; the last entry only closes the final cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryList {
    coords: Vec<i64>,
}

impl BoundaryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `coord` if it is greater than the current last entry.
    /// Returns whether it was appended.
    pub fn push(&mut self, coord: i64) -> bool {
        match self.coords.last() {
            Some(&last) if coord <= last => false,
            _ => {
                self.coords.push(coord);
                true
            }
        }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of cells the list bounds.
    pub fn cell_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// `(index, start, end)` for each consecutive pair.
    pub fn spans(&self) -> impl Iterator<Item = (usize, i64, i64)> + '_ {
        self.coords
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i, pair[0], pair[1]))
    }
}
