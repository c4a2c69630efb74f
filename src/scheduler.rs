//! Concurrent merged-region discovery.
//!
//! The scheduler owns all shared mutable state. Discovery starts one task at
//! the grid origin; each task claims its anchor in the visited set
//! (first-claim-wins), grows the rectangle rooted there, records it, and
//! forks a task per successor anchor. Tasks run inside a [`rayon::scope`],
//! which bounds in-flight parallelism to the thread pool and acts as the
//! fork-join latch: the entry point returns only after every transitively
//! spawned task has completed.
//!
//! The first fault inside any task raises a shared abort flag; remaining
//! tasks return at entry and the whole call fails with that single error.
//! No partial result escapes.
//!
//! After the join, a sequential row-major assembly pass ([`resolve`]) turns
//! the grown rectangles into an exact tiling of the grid.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use rayon::Scope;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::grid::{Grid, Point};
use crate::grower::{self, GrownRect};
use crate::region::MergedRect;

/// Counters describing a completed discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscoverySummary {
    /// Rectangles in the returned partition.
    pub rect_count: usize,
    /// Anchor points claimed in the visited set, including out-of-bounds
    /// successors.
    pub anchors_claimed: usize,
    /// Tasks that terminated because their anchor was already claimed.
    pub duplicate_anchors: usize,
    /// Tasks that terminated because their anchor lay outside the grid.
    pub out_of_bounds_anchors: usize,
    /// Grown rectangles dropped because another rectangle already covered
    /// their anchor cell.
    pub dropped_covered_anchors: usize,
    /// Rectangles shrunk during assembly because part of their extent was
    /// already covered.
    pub trimmed_rects: usize,
    /// Distinct cells covered by the returned partition. Always equals the
    /// grid cell count.
    pub cells_covered: u64,
}

#[derive(Default)]
struct SearchState {
    visited: FxHashSet<Point>,
    grown: Vec<GrownRect>,
    duplicate_anchors: usize,
    out_of_bounds_anchors: usize,
}

struct Search<'g> {
    grid: &'g Grid,
    config: &'g MergeConfig,
    state: Mutex<SearchState>,
    aborted: AtomicBool,
    first_error: Mutex<Option<MergeError>>,
}

/// Discover the merged-region partition of `grid` with the default config.
pub fn discover(grid: &Grid) -> Result<Vec<MergedRect>, MergeError> {
    discover_with_config(grid, &MergeConfig::default())
}

/// Discover the merged-region partition of `grid`.
///
/// Returns rectangles sorted by top-left corner (row, then column); the
/// partition itself is deterministic regardless of task interleaving, so
/// repeated runs yield identical vectors.
pub fn discover_with_config(
    grid: &Grid,
    config: &MergeConfig,
) -> Result<Vec<MergedRect>, MergeError> {
    discover_with_summary(grid, config).map(|(rects, _)| rects)
}

/// Like [`discover_with_config`], additionally reporting run counters.
pub fn discover_with_summary(
    grid: &Grid,
    config: &MergeConfig,
) -> Result<(Vec<MergedRect>, DiscoverySummary), MergeError> {
    if grid.is_empty() {
        return Err(MergeError::EmptyGrid);
    }
    if grid.height() > config.max_rows || grid.width() > config.max_cols {
        return Err(MergeError::LimitsExceeded {
            rows: grid.height(),
            cols: grid.width(),
            max_rows: config.max_rows,
            max_cols: config.max_cols,
        });
    }

    let search = Search {
        grid,
        config,
        state: Mutex::new(SearchState::default()),
        aborted: AtomicBool::new(false),
        first_error: Mutex::new(None),
    };

    rayon::scope(|scope| search.visit(scope, Point::new(0, 0)));

    if let Some(err) = search
        .first_error
        .lock()
        .expect("first-error lock poisoned")
        .take()
    {
        return Err(err);
    }

    let state = search
        .state
        .into_inner()
        .expect("search state lock poisoned");
    let anchors_claimed = state.visited.len();
    let resolution = resolve(grid, config, state.grown)?;

    let summary = DiscoverySummary {
        rect_count: resolution.rects.len(),
        anchors_claimed,
        duplicate_anchors: state.duplicate_anchors,
        out_of_bounds_anchors: state.out_of_bounds_anchors,
        dropped_covered_anchors: resolution.dropped_covered_anchors,
        trimmed_rects: resolution.trimmed_rects,
        cells_covered: resolution.cells_covered,
    };
    Ok((resolution.rects, summary))
}

impl<'g> Search<'g> {
    fn visit<'s>(&'s self, scope: &Scope<'s>, anchor: Point) {
        if self.aborted.load(Ordering::Relaxed) {
            return;
        }

        {
            let mut state = self.state.lock().expect("search state lock poisoned");
            if !state.visited.insert(anchor) {
                state.duplicate_anchors += 1;
                return;
            }
            if self.grid.is_outside(anchor) {
                state.out_of_bounds_anchors += 1;
                return;
            }
        }

        let grown = match grower::grow(self.grid, anchor, self.config) {
            Ok(grown) => grown,
            Err(err) => {
                self.fail(err);
                return;
            }
        };

        self.state
            .lock()
            .expect("search state lock poisoned")
            .grown
            .push(grown);

        scope.spawn(move |scope| self.visit(scope, grown.below));
        scope.spawn(move |scope| self.visit(scope, grown.right));
    }

    fn fail(&self, err: MergeError) {
        let mut slot = self.first_error.lock().expect("first-error lock poisoned");
        if slot.is_none() {
            *slot = Some(err);
        }
        self.aborted.store(true, Ordering::Relaxed);
    }
}

struct Resolution {
    rects: Vec<MergedRect>,
    dropped_covered_anchors: usize,
    trimmed_rects: usize,
    cells_covered: u64,
}

/// Deterministic post-join assembly of the returned partition.
///
/// Anchor deduplication is per point, not per covered cell, so grown
/// rectangles can overlap: a successor chain can plant an anchor inside a
/// rectangle another chain grew, or two chains can grow rectangles that
/// share cells without either anchor lying inside the other. Walking cells
/// in row-major order, taking the grown rectangle anchored at each
/// still-uncovered cell (growing on demand when no task anchored there),
/// and fitting it against the already-covered cells yields an exact tiling:
/// every cell ends up in exactly one rectangle, independent of task
/// interleaving.
fn resolve(
    grid: &Grid,
    config: &MergeConfig,
    grown: Vec<GrownRect>,
) -> Result<Resolution, MergeError> {
    let width = grid.width() as usize;
    let by_anchor: FxHashMap<Point, MergedRect> =
        grown.iter().map(|g| (g.rect.top_left, g.rect)).collect();

    let mut covered = vec![false; grid.cell_count() as usize];
    let mut rects = Vec::with_capacity(by_anchor.len());
    let mut dropped = 0usize;
    let mut trimmed = 0usize;
    let mut cells_covered = 0u64;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let anchor = Point::new(x, y);
            if covered[y as usize * width + x as usize] {
                if by_anchor.contains_key(&anchor) {
                    dropped += 1;
                }
                continue;
            }
            let full = match by_anchor.get(&anchor) {
                Some(rect) => *rect,
                None => grower::grow(grid, anchor, config)?.rect,
            };
            let fitted = fit_uncovered(&covered, width, full);
            if fitted != full {
                trimmed += 1;
            }
            for p in fitted.cells() {
                covered[p.y as usize * width + p.x as usize] = true;
            }
            cells_covered += fitted.cell_count();
            rects.push(fitted);
        }
    }

    Ok(Resolution {
        rects,
        dropped_covered_anchors: dropped,
        trimmed_rects: trimmed,
        cells_covered,
    })
}

/// Shrink `rect` against already-covered cells: the right edge stops before
/// the first covered cell in the anchor row, then the bottom edge stops
/// before the first row with a covered cell in that column span. The anchor
/// cell itself must be uncovered, so the result is never empty.
fn fit_uncovered(covered: &[bool], width: usize, rect: MergedRect) -> MergedRect {
    let anchor = rect.top_left;
    let anchor_row = anchor.y as usize * width;
    let mut right = anchor.x;
    while right < rect.bottom_right.x && !covered[anchor_row + right as usize + 1] {
        right += 1;
    }
    let mut bottom = anchor.y;
    while bottom < rect.bottom_right.y {
        let row = (bottom + 1) as usize * width;
        if (anchor.x..=right).any(|x| covered[row + x as usize]) {
            break;
        }
        bottom += 1;
    }
    MergedRect::new(anchor, Point::new(right, bottom))
}
