use tracing::debug;

use crate::grid_scan::lines::types::{BoundaryList, LineScan};
use crate::grid_scan::raster::PixelSampler;

/// Whether line `index` is white under `scan`'s predicate.
///
/// Only the first `min(sample_cap, line length)` pixels are looked at, so a
/// line that turns dark past the cap still counts as white.
pub fn is_white_line<S: PixelSampler + ?Sized>(raster: &S, scan: &LineScan, index: usize) -> bool {
    let samples = scan.axis.line_length(raster).min(scan.sample_cap);
    (0..samples).all(|position| {
        scan.whiteness
            .accepts(scan.axis.sample(raster, index, position))
    })
}

/// Scans one axis for white separator lines.
///
/// The list opens with `0` when line 0 is white and with the virtual `-1`
/// otherwise. Each run of consecutive white lines contributes its first index.
/// Unless the last white line sits at `extent - 1`, the trailing edge extent is
/// appended to close the final cell. A list that would still hold only its
/// leading entry is closed with the axis's own line count instead, so a fully
/// white axis becomes `[0, line_count]` whatever the trailing edge is. An empty
/// raster yields an empty list.
pub fn detect_boundaries<S: PixelSampler + ?Sized>(raster: &S, scan: &LineScan) -> BoundaryList {
    let mut boundaries = BoundaryList::new();

    if raster.is_empty() {
        debug!(axis = ?scan.axis, "Empty raster, no boundaries");
        return boundaries;
    }

    let line_count = scan.axis.line_count(raster) as i64;

    let mut prev_white: i64 = if is_white_line(raster, scan, 0) { 0 } else { -1 };
    boundaries.push(prev_white);

    for index in scan.seed.resume_at(prev_white)..line_count {
        if !is_white_line(raster, scan, index as usize) {
            continue;
        }
        if prev_white + 1 != index {
            boundaries.push(index);
        }
        prev_white = index;
    }

    // One white run covering the whole axis is closed below, not by the edge.
    let whole_axis_white = boundaries.len() == 1 && prev_white + 1 == line_count;
    let closing = scan.trailing_edge.extent(raster) as i64;
    if !whole_axis_white && prev_white + 1 != closing && !boundaries.push(closing) {
        debug!(
            axis = ?scan.axis,
            closing,
            "Trailing edge does not extend the boundary list, dropped"
        );
    }
    if boundaries.len() < 2 {
        boundaries.push(line_count);
    }

    debug!(
        axis = ?scan.axis,
        boundaries = boundaries.len(),
        cells = boundaries.cell_count(),
        "Detected grid boundaries"
    );
    boundaries
}
