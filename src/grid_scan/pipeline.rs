use std::path::Path;

use tracing::{info, instrument, warn};

use crate::grid_scan::{
    cells::{Finding, ScanReport, collect_findings},
    common::error::{Result, ScanError},
    config::{MAX_LEVEL, ScanConfig},
    lines::detect_boundaries,
    raster::{ImageRasterReader, PixelSampler, RasterReader},
};


pub struct GridScanPipeline<R: RasterReader> {
    reader: R,
    config: ScanConfig,
}

impl GridScanPipeline<ImageRasterReader> {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            reader: ImageRasterReader,
            config,
        }
    }
}

impl<R: RasterReader> GridScanPipeline<R> {
    pub fn with_custom(reader: R, config: ScanConfig) -> Self {
        Self { reader, config }
    }

    fn validate_min_level(&self) -> Result<()> {
        if self.config.min_level > MAX_LEVEL {
            return Err(ScanError::InvalidMinLevel(self.config.min_level));
        }
        Ok(())
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Raster exceeds maximum dimension");
                return Err(ScanError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data` and returns the cells at or above the configured level.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn scan(&self, input_data: &[u8]) -> Result<Vec<Finding>> {
        info!("Starting grid scan");
        self.validate_min_level()?;

        let raster = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_raster(input_data)?
        };

        self.scan_decoded(&raster)
    }

    /// Scans an already decoded grayscale raster.
    #[instrument(skip(self, raster), fields(width = raster.width(), height = raster.height()))]
    pub fn scan_raster<S: PixelSampler + ?Sized>(&self, raster: &S) -> Result<Vec<Finding>> {
        self.validate_min_level()?;
        self.scan_decoded(raster)
    }

    fn scan_decoded<S: PixelSampler + ?Sized>(&self, raster: &S) -> Result<Vec<Finding>> {
        let (width, height) = (raster.width(), raster.height());

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let scans = self.config.scans();
        let (rows, columns) = {
            let _span = tracing::info_span!("detect_boundaries").entered();
            (
                detect_boundaries(raster, &scans.rows),
                detect_boundaries(raster, &scans.columns),
            )
        };

        let findings = {
            let _span = tracing::info_span!("score_cells", min_level = self.config.min_level).entered();
            collect_findings(raster, &rows, &columns, self.config.min_level)
        };

        info!(
            width,
            height,
            grid_rows = rows.cell_count(),
            grid_columns = columns.cell_count(),
            findings = findings.len(),
            "Grid scan complete"
        );
        Ok(findings)
    }

    #[instrument(skip(self, input_path))]
    pub fn scan_file<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<Finding>> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Scanning file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ScanError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.scan(&input_data)
    }

    pub fn report(&self, input_data: &[u8]) -> Result<ScanReport> {
        self.scan(input_data).map(ScanReport::from)
    }

    pub fn report_file<P: AsRef<Path>>(&self, input_path: P) -> Result<ScanReport> {
        self.scan_file(input_path).map(ScanReport::from)
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}
