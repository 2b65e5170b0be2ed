//! Colon Dash - A scrolling corridor arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (corridor, items, collisions, game state)
//! - `renderer`: Render-surface abstraction and frame drawing
//! - `platform`: Input intent and fixed-timestep frame clock
//! - `tuning`: Data-driven game balance
//! - `tips`: Rotating health tips shown next to the play field

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tips;
pub mod tuning;

pub use error::TuningError;
pub use tips::TipRotator;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Corridor defaults
    pub const SEGMENT_HEIGHT: f32 = 100.0;
    /// Initial corridor width as a fraction of viewport width
    pub const INITIAL_WIDTH_RATIO: f64 = 0.6;
    /// Max width change per recycled segment (±)
    pub const WIDTH_JITTER: f32 = 50.0;
    pub const MIN_CORRIDOR_WIDTH: f32 = 200.0;
    /// Corridor never gets closer than this to filling the viewport
    pub const CORRIDOR_EDGE_MARGIN: f32 = 100.0;
    /// Extra segments beyond the visible height
    pub const SEGMENT_OVERSCAN: f32 = 2.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Horizontal move per tick
    pub const PLAYER_STEP: f32 = 4.0;

    /// Item defaults
    pub const ITEM_RADIUS: f32 = 20.0;
    /// Sprite draw size (square)
    pub const ITEM_SIZE: f32 = 40.0;
    pub const ITEM_SPAWN_Y: f32 = -20.0;
    /// Number of sprite variants per item kind
    pub const ITEM_VARIANTS: u8 = 3;
    pub const BENEFICIAL_SPAWN_INTERVAL: u64 = 100;
    pub const HARMFUL_SPAWN_INTERVAL: u64 = 150;

    /// Scoring
    pub const BENEFICIAL_SCORE: u64 = 10;
    pub const BENEFICIAL_HEAL: u32 = 5;
    pub const HARMFUL_DAMAGE: u32 = 10;
    pub const MAX_HEALTH: u32 = 100;

    /// Scroll speed (units per tick) and its linear ramp
    pub const START_SPEED: f32 = 2.0;
    pub const SPEED_RAMP: f32 = 0.0005;

    /// Health tip rotation period (5 seconds at 60 Hz)
    pub const TIP_INTERVAL_TICKS: u64 = 300;
}
