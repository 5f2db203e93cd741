//! Cell scoring module
//!
//! Turns two boundary lists into a lattice of cell rectangles, scores each
//! cell by darkness and keeps those at or above a threshold.

mod enumerator;
mod scorer;
pub mod types;


pub use enumerator::{GridScans, collect_findings, find_cells, find_cells_with, grid_cells};
pub use scorer::{darkness_level, score_cell};
pub use types::{CellRect, Finding, GridCell, ScanReport};
