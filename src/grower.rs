//! Rectangle growing: the core discovery step.
//!
//! Given an anchor point (the top-left cell of a not-yet-claimed region),
//! [`grow`] finds the maximal same-valued rectangle rooted there: scan
//! rightward along the current row until the value changes or a limit is
//! hit, then try to descend one row and re-scan, with a right boundary that
//! a value mismatch establishes for the rows below. The finished rectangle
//! yields the two successor anchors that seed further discovery: the cell
//! below its bottom-left corner and the cell right of its top-right corner.
//!
//! The grower is pure: it reads only the immutable grid, so the scheduler
//! runs it concurrently from many anchors without synchronization.

use crate::config::{MergeConfig, RowScanMode};
use crate::error::MergeError;
use crate::grid::{Grid, Point};
use crate::region::MergedRect;

/// A grown rectangle plus the two anchors that continue the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrownRect {
    pub rect: MergedRect,
    /// Same column as the rectangle's left edge, one row past its bottom
    /// edge. May lie outside the grid.
    pub below: Point,
    /// Same row as the rectangle's top edge, one column past its right
    /// edge. May lie outside the grid.
    pub right: Point,
}

/// Grow the maximal same-valued rectangle anchored at `anchor`.
///
/// Precondition: `anchor` lies inside the grid; the scheduler checks this
/// before calling. Cursor moves are still bounds-checked, so a traversal
/// defect surfaces as [`MergeError::BoundsFault`] instead of a panic.
pub(crate) fn grow(
    grid: &Grid,
    anchor: Point,
    config: &MergeConfig,
) -> Result<GrownRect, MergeError> {
    let value = grid.value_at(anchor)?;
    let mut cur = anchor;
    let mut right_boundary: Option<u32> = None;

    loop {
        // Rightward growth along the current row.
        loop {
            let next = cur.right();
            if at_right_stop(grid, next, right_boundary) {
                break;
            }
            if grid.value_at(next)? != value {
                right_boundary = match config.row_scan {
                    // Compatible behavior: every mismatch re-fixes the
                    // boundary, and a boundary at column 0 stays unset.
                    RowScanMode::Corners => (cur.x > 0).then_some(cur.x),
                    RowScanMode::FullRow => right_boundary.or(Some(cur.x)),
                };
                break;
            }
            cur = next;
        }

        // Strict mode pins the boundary to the first row's extent even when
        // growth stopped at the grid edge.
        if config.row_scan == RowScanMode::FullRow && right_boundary.is_none() {
            right_boundary = Some(cur.x);
        }

        let next_row_start = Point::new(anchor.x, cur.y + 1);
        if grid.is_past_bottom_edge(next_row_start) {
            break;
        }
        if !may_descend(grid, value, cur, next_row_start, right_boundary, config)? {
            break;
        }
        cur = next_row_start;
    }

    let rect = MergedRect::new(anchor, cur);
    Ok(GrownRect {
        rect,
        below: Point::new(anchor.x, cur.y + 1),
        right: Point::new(cur.x + 1, anchor.y),
    })
}

/// True iff `next` lies past the horizontal limit: the grid's right edge,
/// or the right boundary once one is established.
fn at_right_stop(grid: &Grid, next: Point, right_boundary: Option<u32>) -> bool {
    if let Some(boundary) = right_boundary {
        if next.x > boundary {
            return true;
        }
    }
    grid.is_past_right_edge(next)
}

fn may_descend(
    grid: &Grid,
    value: i64,
    cur: Point,
    next_row_start: Point,
    right_boundary: Option<u32>,
    config: &MergeConfig,
) -> Result<bool, MergeError> {
    match config.row_scan {
        RowScanMode::Corners => Ok(grid.value_at(cur)? == grid.value_at(next_row_start)?),
        RowScanMode::FullRow => {
            let limit = right_boundary.unwrap_or(cur.x);
            for x in next_row_start.x..=limit {
                if grid.value_at(Point::new(x, next_row_start.y))? != value {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}
