use crate::grid_scan::common::error::Result;
use crate::grid_scan::raster::types::GrayRaster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<GrayRaster>;
}
