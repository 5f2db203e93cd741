//! Common utilities module
//!
//! Shared error type used across the grid scan.

pub mod error;

pub use error::{Result, ScanError};
