use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid raster: {width}x{height} does not match a buffer of {len} pixels")]
    InvalidRaster {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Degenerate cell rectangle ({min_x}, {min_y})..({max_x}, {max_y}) has no pixels")]
    DegenerateCell {
        min_x: i64,
        min_y: i64,
        max_x: i64,
        max_y: i64,
    },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Minimum level must be within 0..=100, got {0}")]
    InvalidMinLevel(u8),
}

pub type Result<T> = std::result::Result<T, ScanError>;
