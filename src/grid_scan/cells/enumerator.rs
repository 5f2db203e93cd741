use tracing::{debug, trace};

use crate::grid_scan::cells::scorer::score_cell;
use crate::grid_scan::cells::types::{CellRect, Finding, GridCell};
use crate::grid_scan::lines::{BoundaryList, LineScan, detect_boundaries};
use crate::grid_scan::raster::PixelSampler;

/// Row and column scan parameters used together by the enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridScans {
    pub rows: LineScan,
    pub columns: LineScan,
}

impl Default for GridScans {
    fn default() -> Self {
        Self {
            rows: LineScan::rows(),
            columns: LineScan::columns(),
        }
    }
}

/// Cells flagged at `min_level` or darker, in row-major order, with the stock
/// row and column scans.
///
/// `min_level == 0` reports every cell. Values above 100 report nothing.
pub fn find_cells<S: PixelSampler + ?Sized>(raster: &S, min_level: u8) -> Vec<Finding> {
    find_cells_with(raster, min_level, &GridScans::default())
}

pub fn find_cells_with<S: PixelSampler + ?Sized>(
    raster: &S,
    min_level: u8,
    scans: &GridScans,
) -> Vec<Finding> {
    let rows = detect_boundaries(raster, &scans.rows);
    let columns = detect_boundaries(raster, &scans.columns);
    collect_findings(raster, &rows, &columns, min_level)
}

/// Lattice cells for a pair of boundary lists, row by row.
///
/// The last entry of each list only closes a cell and never starts one.
pub fn grid_cells<'a>(
    rows: &'a BoundaryList,
    columns: &'a BoundaryList,
) -> impl Iterator<Item = GridCell> + 'a {
    rows.spans().flat_map(move |(y, top, bottom)| {
        columns.spans().map(move |(x, left, right)| GridCell {
            x,
            y,
            rect: CellRect::between_lines(left, top, right, bottom),
        })
    })
}

/// Scores every lattice cell and keeps those with `level >= min_level`.
///
/// Zero-area cells are skipped.
pub fn collect_findings<S: PixelSampler + ?Sized>(
    raster: &S,
    rows: &BoundaryList,
    columns: &BoundaryList,
    min_level: u8,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for cell in grid_cells(rows, columns) {
        let level = match score_cell(raster, &cell.rect) {
            Ok(level) => level,
            Err(e) => {
                trace!(x = cell.x, y = cell.y, "Skipping cell: {}", e);
                continue;
            }
        };

        if level >= min_level {
            findings.push(Finding {
                x: cell.x,
                y: cell.y,
                level,
            });
        }
    }

    debug!(
        cells = rows.cell_count() * columns.cell_count(),
        findings = findings.len(),
        min_level,
        "Scored grid cells"
    );
    findings
}
