//! Grid line detection module
//!
//! Finds continuous white separator lines along one axis and turns them into
//! an ordered list of boundary coordinates.

mod detector;
pub mod types;


pub use detector::{detect_boundaries, is_white_line};
pub use types::{Axis, BoundaryList, DEFAULT_SAMPLE_CAP, LineScan, SeedScan, TrailingEdge, Whiteness};
