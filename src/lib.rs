pub mod grid_scan;
pub mod logger;
