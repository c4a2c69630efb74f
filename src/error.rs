//! Errors surfaced by grid construction and merge discovery.

use crate::error_codes;
use crate::grid::Point;
use thiserror::Error;

/// Errors produced by grid construction and discovery APIs.
///
/// Input-shape errors are raised before any search task is spawned;
/// [`MergeError::BoundsFault`] reports an internal traversal defect and
/// should be treated as a bug, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MergeError {
    #[error(
        "[GRIDMERGE_INPUT_001] empty grid: at least one row of at least one cell is required. Suggestion: validate the table shape before calling discover."
    )]
    EmptyGrid,

    #[error(
        "[GRIDMERGE_INPUT_002] jagged grid: row {row} has {len} cells, expected {expected}. Suggestion: pad or truncate rows to a uniform width."
    )]
    JaggedGrid { row: u32, len: u32, expected: u32 },

    #[error(
        "[GRIDMERGE_INPUT_003] grid of {rows} rows x {cols} cols exceeds configured limits (max_rows={max_rows}, max_cols={max_cols}). Suggestion: raise `max_rows`/`max_cols` in MergeConfig."
    )]
    LimitsExceeded {
        rows: u32,
        cols: u32,
        max_rows: u32,
        max_cols: u32,
    },

    #[error(
        "[GRIDMERGE_INTERNAL_001] traversal reached {point} outside the grid. Suggestion: report a bug with the input grid if possible."
    )]
    BoundsFault { point: Point },
}

impl MergeError {
    /// The stable error code for this variant (see [`crate::error_codes`]).
    pub fn code(&self) -> &'static str {
        match self {
            MergeError::EmptyGrid => error_codes::INPUT_EMPTY_GRID,
            MergeError::JaggedGrid { .. } => error_codes::INPUT_JAGGED_GRID,
            MergeError::LimitsExceeded { .. } => error_codes::INPUT_LIMITS_EXCEEDED,
            MergeError::BoundsFault { .. } => error_codes::INTERNAL_BOUNDS_FAULT,
        }
    }
}
