//! Grid scan configuration types

use crate::grid_scan::cells::GridScans;
use crate::grid_scan::lines::{DEFAULT_SAMPLE_CAP, LineScan, TrailingEdge};

/// Highest accepted darkness threshold.
pub const MAX_LEVEL: u8 = 100;

/// Configuration for a grid scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Darkness threshold in `0..=100`; cells at or above it are reported
    pub min_level: u8,
    /// Pixels sampled along each candidate line when testing for whiteness
    pub sample_cap: usize,
    /// Extent that closes the row boundary list.
    /// `Width` keeps the established output for non-square boards.
    pub row_trailing_edge: TrailingEdge,
    /// Whether to check raster dimensions before scanning
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is on
    pub max_dimension: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_level: 0,
            sample_cap: DEFAULT_SAMPLE_CAP,
            row_trailing_edge: TrailingEdge::Width,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Row and column scans derived from this configuration.
    pub fn scans(&self) -> GridScans {
        GridScans {
            rows: LineScan::rows()
                .with_sample_cap(self.sample_cap)
                .with_trailing_edge(self.row_trailing_edge),
            columns: LineScan::columns().with_sample_cap(self.sample_cap),
        }
    }
}

/// Builder for ScanConfig
#[derive(Default)]
pub struct ScanConfigBuilder {
    min_level: Option<u8>,
    sample_cap: Option<usize>,
    row_trailing_edge: Option<TrailingEdge>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ScanConfigBuilder {
    pub fn min_level(mut self, level: u8) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = Some(cap);
        self
    }

    pub fn row_trailing_edge(mut self, edge: TrailingEdge) -> Self {
        self.row_trailing_edge = Some(edge);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            min_level: self.min_level.unwrap_or(default.min_level),
            sample_cap: self.sample_cap.unwrap_or(default.sample_cap),
            row_trailing_edge: self.row_trailing_edge.unwrap_or(default.row_trailing_edge),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
