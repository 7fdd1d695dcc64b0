pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Invalid game configuration, reported once at startup.
///
/// Obstacle geometry is never clamped to make a bad configuration work: every
/// variant here means some invariant (non-negative barrier heights, a reachable
/// scroll speed, a spawn band above the ground) cannot hold.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[display("ground level {ground_level} must lie within the screen height {screen_height}")]
    GroundOutOfScreen {
        ground_level: f32,
        screen_height: f32,
    },
    #[display(
        "gap height {gap_height} leaves no room for two {min_barrier}px barriers above ground level {ground_level}"
    )]
    NoGapRange {
        ground_level: f32,
        gap_height: f32,
        min_barrier: f32,
    },
    #[display("spawn gap range [{min}, {max}] must be non-negative and ordered")]
    InvalidSpawnGap { min: f32, max: f32 },
    #[display("bird spawn band [{min}, {max}] must be ordered and lie within [0, {limit}]")]
    InvalidSpawnBand { min: f32, max: f32, limit: f32 },
    #[display("scroll speed {speed} must be in [1, {limit})")]
    ScrollSpeedOutOfRange { speed: f32, limit: f32 },
    #[display(
        "re-arm fraction {fraction} must be in (-1, 1] and keep the re-arm velocity below the max fall speed {max_fall_speed}"
    )]
    InvalidRearmFraction { fraction: f32, max_fall_speed: f32 },
    #[display("population must contain at least one bird")]
    EmptyPopulation,
    #[display("frame rate must be at least 1")]
    ZeroFps,
}

/// A seed string that is neither a 32-digit hex seed nor a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hex digits or a decimal number")]
pub struct ParseSeedError {
    #[error(not(source))]
    input: String,
}
