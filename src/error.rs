//! Configuration errors
//!
//! The simulation itself never fails; the only thing that can be rejected is a
//! tuning/viewport combination that would make the corridor impossible to build.

/// Why a `Tuning` was refused
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuningError {
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("segment height must be positive, got {0}")]
    InvalidSegmentHeight(f32),

    #[error(
        "viewport width {viewport_width} leaves no room for a corridor of at least {min_width} (edge margin {margin})"
    )]
    ViewportTooNarrow {
        viewport_width: f32,
        min_width: f32,
        margin: f32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("speed ramp must be finite and non-negative, got {0}")]
    InvalidSpeedRamp(f32),

    #[error("max health must be at least 1")]
    ZeroMaxHealth,

    #[error("{0} spawn interval must be at least one tick")]
    ZeroSpawnInterval(&'static str),

    #[error("failed to parse tuning: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err.to_string())
    }
}
