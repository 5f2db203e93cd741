//! Grid scan module
//!
//! Locates the white separator lines of a board image, splits it into cells
//! and flags the cells dark enough to hold a mine.

pub mod cells;
pub mod common;
pub mod config;
pub mod lines;
pub mod pipeline;
pub mod raster;

#[cfg(test)]
pub(crate) mod test_support;

pub use common::{
    Result,
    ScanError,
};

pub use raster::{
    GrayRaster,
    ImageRasterReader,
    PixelSampler,
    RasterReader,
};

pub use lines::{
    Axis,
    BoundaryList,
    LineScan,
    TrailingEdge,
    Whiteness,
    detect_boundaries,
};

pub use cells::{
    CellRect,
    Finding,
    ScanReport,
    find_cells,
    score_cell,
};

pub use config::{
    ScanConfig,
    ScanConfigBuilder,
};

pub use pipeline::GridScanPipeline;
