//! Configuration for merge discovery.
//!
//! `MergeConfig` centralizes the row-scan strictness and the input size
//! limits so the entry points carry no hardcoded thresholds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How row uniformity is verified while growing a rectangle downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowScanMode {
    /// The compatible heuristic carried over from the original algorithm:
    /// before descending, compare only the rightmost cell scanned in the
    /// current row against the leftmost cell of the next row. Cheap, but a
    /// known gap: it can admit a rectangle whose rows are not all uniform,
    /// and the right boundary can shift between rows (a boundary fixed at
    /// column 0 never binds).
    Corners,
    /// The strict variant: verify every cell of the next row's segment
    /// against the anchor value, and pin the right boundary to the first
    /// row's extent so it cannot move between rows.
    FullRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Row-consistency check used during downward growth.
    pub row_scan: RowScanMode,
    /// Maximum grid height accepted by discovery. Every cell is processed,
    /// so this bounds worst-case fan-out on degenerate grids.
    pub max_rows: u32,
    /// Maximum grid width accepted by discovery.
    pub max_cols: u32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            row_scan: RowScanMode::Corners,
            max_rows: 1_048_576,
            max_cols: 16_384,
        }
    }
}

impl MergeConfig {
    /// Default config with the strict full-row check enabled.
    pub fn strict() -> Self {
        Self {
            row_scan: RowScanMode::FullRow,
            ..Default::default()
        }
    }

    pub fn builder() -> MergeConfigBuilder {
        MergeConfigBuilder {
            inner: MergeConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_zero_u32(self.max_rows, "max_rows")?;
        ensure_non_zero_u32(self.max_cols, "max_cols")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

fn ensure_non_zero_u32(value: u32, field: &'static str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveLimit {
            field,
            value: value as u64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct MergeConfigBuilder {
    inner: MergeConfig,
}

impl Default for MergeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeConfigBuilder {
    pub fn new() -> Self {
        MergeConfig::builder()
    }

    pub fn row_scan(mut self, value: RowScanMode) -> Self {
        self.inner.row_scan = value;
        self
    }

    pub fn max_rows(mut self, value: u32) -> Self {
        self.inner.max_rows = value;
        self
    }

    pub fn max_cols(mut self, value: u32) -> Self {
        self.inner.max_cols = value;
        self
    }

    pub fn build(self) -> Result<MergeConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
