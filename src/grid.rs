//! Grid and point types: the immutable input to merge discovery.
//!
//! A [`Grid`] is a dense, row-major array of integer cell values with a
//! validated rectangular shape. It is never mutated after construction, so
//! concurrent search tasks read it without synchronization.

use crate::error::MergeError;
use serde::{Deserialize, Serialize};

/// A cell position in grid coordinates.
///
/// `x` is the column (increases rightward), `y` is the row (increases
/// downward). Both are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Point {
        Point { x, y }
    }

    /// The cell one column to the right.
    pub(crate) fn right(self) -> Point {
        Point {
            x: self.x + 1,
            y: self.y,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An immutable dense grid of integer cell values.
///
/// # Invariants
///
/// `values.len() == width * height`, with cell `(x, y)` stored at
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    values: Vec<i64>,
}

impl Grid {
    /// Build a grid from rows of values, validating the input shape.
    ///
    /// Fails with [`MergeError::EmptyGrid`] when there are no rows or the
    /// first row is empty, and with [`MergeError::JaggedGrid`] when any row
    /// differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Grid, MergeError> {
        let first = rows.first().ok_or(MergeError::EmptyGrid)?;
        if first.is_empty() {
            return Err(MergeError::EmptyGrid);
        }

        let width = first.len();
        let mut values = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MergeError::JaggedGrid {
                    row: y as u32,
                    len: row.len() as u32,
                    expected: width as u32,
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Grid {
            width: width as u32,
            height: rows.len() as u32,
            values,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    ///
    /// A zero `width` or `height` yields an empty grid, which discovery
    /// rejects with [`MergeError::EmptyGrid`].
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> i64) -> Grid {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Grid {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The value at `p`, or [`MergeError::BoundsFault`] when `p` lies
    /// outside the grid.
    pub fn value_at(&self, p: Point) -> Result<i64, MergeError> {
        if self.is_outside(p) {
            return Err(MergeError::BoundsFault { point: p });
        }
        Ok(self.values[p.y as usize * self.width as usize + p.x as usize])
    }

    /// True iff `p.x` lies at or past the right edge.
    pub fn is_past_right_edge(&self, p: Point) -> bool {
        p.x >= self.width
    }

    /// True iff `p.y` lies at or past the bottom edge.
    pub fn is_past_bottom_edge(&self, p: Point) -> bool {
        p.y >= self.height
    }

    /// True iff `p` lies outside the grid on either axis.
    pub fn is_outside(&self, p: Point) -> bool {
        self.is_past_right_edge(p) || self.is_past_bottom_edge(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_row_major_grid() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).expect("valid shape");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.value_at(Point::new(0, 0)), Ok(1));
        assert_eq!(grid.value_at(Point::new(2, 0)), Ok(3));
        assert_eq!(grid.value_at(Point::new(0, 1)), Ok(4));
        assert_eq!(grid.value_at(Point::new(2, 1)), Ok(6));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(Grid::from_rows(vec![]), Err(MergeError::EmptyGrid));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(MergeError::EmptyGrid));
    }

    #[test]
    fn from_rows_reports_first_jagged_row() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3], vec![4]]).unwrap_err();
        assert_eq!(
            err,
            MergeError::JaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn value_at_faults_outside_bounds() {
        let grid = Grid::from_rows(vec![vec![7]]).expect("valid shape");
        let p = Point::new(1, 0);
        assert_eq!(grid.value_at(p), Err(MergeError::BoundsFault { point: p }));
        let p = Point::new(0, 1);
        assert_eq!(grid.value_at(p), Err(MergeError::BoundsFault { point: p }));
    }

    #[test]
    fn edge_predicates() {
        let grid = Grid::from_fn(3, 2, |x, y| (x + y) as i64);
        assert!(!grid.is_past_right_edge(Point::new(2, 0)));
        assert!(grid.is_past_right_edge(Point::new(3, 0)));
        assert!(!grid.is_past_bottom_edge(Point::new(0, 1)));
        assert!(grid.is_past_bottom_edge(Point::new(0, 2)));
        assert!(grid.is_outside(Point::new(3, 1)));
        assert!(grid.is_outside(Point::new(1, 2)));
        assert!(!grid.is_outside(Point::new(2, 1)));
    }
}
