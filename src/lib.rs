//! Merged-region discovery for table grids.
//!
//! This crate partitions a rectangular grid of integer values into the
//! maximal set of non-overlapping, axis-aligned rectangles in which every
//! cell holds the same value: the "detect merged cells" problem for a
//! flattened table representation.
//!
//! The crate provides:
//! - [`Grid`]: an immutable, bounds-safe view over the input values
//! - [`discover`] / [`discover_with_config`]: concurrent discovery of the
//!   merged-region partition
//! - [`MergeConfig`]: row-scan strictness and input size limits
//!
//! # Quick Start
//!
//! ```
//! use grid_merge::{discover, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1, 1, 2],
//!     vec![1, 1, 2],
//! ])?;
//!
//! let rects = discover(&grid)?;
//! assert_eq!(rects.len(), 2);
//! # Ok::<(), grid_merge::MergeError>(())
//! ```

mod config;
mod error;
pub mod error_codes;
mod grid;
mod grower;
mod region;
mod scheduler;

pub use config::{ConfigError, MergeConfig, MergeConfigBuilder, RowScanMode};
pub use error::MergeError;
pub use grid::{Grid, Point};
pub use region::MergedRect;
pub use scheduler::{discover, discover_with_config, discover_with_summary, DiscoverySummary};
