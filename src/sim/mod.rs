//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step sizes
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod corridor;
pub mod item;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, random_range};
pub use corridor::{Corridor, Segment};
pub use item::{Item, ItemKind, due_spawns, spawn_bounds, spawn_item};
pub use state::{
    EndCause, GameEvent, GamePhase, GameState, HealthTier, Player, Snapshot, Summary,
};
pub use tick::{TickInput, tick};
