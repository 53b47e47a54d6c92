//! Setup-time failures. Nothing in the per-tick path returns these.

use thiserror::Error;

/// Errors raised while validating tunables or building the sprite bundle.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("gap height range [{lo}, {hi}) is empty or below zero")]
    EmptyGapRange { lo: f64, hi: f64 },
    #[error("gap of {gap} below a gap top of up to {hi} does not fit above the floor at {floor_y}")]
    GapDoesNotFit { gap: f64, hi: f64, floor_y: f64 },
    #[error("floor at {floor_y} lies outside a world {world_height} tall")]
    FloorOutsideWorld { floor_y: f64, world_height: f64 },
    #[error("start x {x} lies outside a world {world_width} wide")]
    StartOutsideWorld { x: f64, world_width: f64 },
    #[error("silhouette {width}x{height} has a zero-sized dimension")]
    ZeroSizedSilhouette { width: usize, height: usize },
    #[error("alpha buffer holds {actual} samples, expected {expected}")]
    AlphaLength { expected: usize, actual: usize },
    #[cfg(feature = "json-config")]
    #[error("could not parse config: {0}")]
    Parse(String),
}
