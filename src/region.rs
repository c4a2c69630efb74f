//! The merged-region rectangle type produced by discovery.

use crate::grid::Point;
use serde::{Deserialize, Serialize};

/// A maximal same-valued rectangle, in inclusive grid coordinates.
///
/// # Invariants
///
/// `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl MergedRect {
    pub(crate) fn new(top_left: Point, bottom_right: Point) -> MergedRect {
        debug_assert!(top_left.x <= bottom_right.x && top_left.y <= bottom_right.y);
        MergedRect {
            top_left,
            bottom_right,
        }
    }

    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    pub fn cell_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y <= self.bottom_right.y
    }

    pub fn overlaps(&self, other: &MergedRect) -> bool {
        self.top_left.x <= other.bottom_right.x
            && other.top_left.x <= self.bottom_right.x
            && self.top_left.y <= other.bottom_right.y
            && other.top_left.y <= self.bottom_right.y
    }

    /// Iterate every cell inside the rectangle, row by row.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        let (x0, x1) = (self.top_left.x, self.bottom_right.x);
        (self.top_left.y..=self.bottom_right.y)
            .flat_map(move |y| (x0..=x1).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: u32, y0: u32, x1: u32, y1: u32) -> MergedRect {
        MergedRect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn dimensions_are_inclusive() {
        let r = rect(1, 2, 3, 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 1);
        assert_eq!(r.cell_count(), 3);

        let single = rect(0, 0, 0, 0);
        assert_eq!(single.cell_count(), 1);
    }

    #[test]
    fn contains_checks_closed_range() {
        let r = rect(1, 1, 2, 3);
        assert!(r.contains(Point::new(1, 1)));
        assert!(r.contains(Point::new(2, 3)));
        assert!(!r.contains(Point::new(0, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(!r.contains(Point::new(1, 4)));
    }

    #[test]
    fn overlaps_detects_shared_cells_only() {
        let a = rect(0, 0, 1, 1);
        assert!(a.overlaps(&rect(1, 1, 2, 2)));
        assert!(!a.overlaps(&rect(2, 0, 3, 1)));
        assert!(!a.overlaps(&rect(0, 2, 1, 3)));
    }

    #[test]
    fn cells_enumerates_row_major() {
        let cells: Vec<Point> = rect(1, 0, 2, 1).cells().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
    }
}
