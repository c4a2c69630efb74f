//! Stable string codes for every error surfaced by this crate.
//!
//! Codes are part of the public contract: messages may be reworded, codes
//! never change meaning.

pub const INPUT_EMPTY_GRID: &str = "GRIDMERGE_INPUT_001";
pub const INPUT_JAGGED_GRID: &str = "GRIDMERGE_INPUT_002";
pub const INPUT_LIMITS_EXCEEDED: &str = "GRIDMERGE_INPUT_003";
pub const INTERNAL_BOUNDS_FAULT: &str = "GRIDMERGE_INTERNAL_001";
