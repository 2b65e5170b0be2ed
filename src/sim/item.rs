//! Falling items and the periodic spawner

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::random_range;
use super::corridor::Corridor;
use crate::tuning::Tuning;

/// What touching an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Adds score and heals
    Beneficial,
    /// Costs health
    Harmful,
}

impl ItemKind {
    /// Sprite path prefix for this kind (`images/good/good1.png`, ...)
    pub fn asset_prefix(&self) -> &'static str {
        match self {
            ItemKind::Beneficial => "good",
            ItemKind::Harmful => "bad",
        }
    }
}

/// A collectible or hazard scrolling down with the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Index of the sprite variant to draw
    pub variant: u8,
    /// Sprite draw size (width, height)
    pub size: Vec2,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            kind,
            pos,
            radius: tuning.item_radius,
            variant: 0,
            size: Vec2::splat(tuning.item_size),
        }
    }

    /// Scroll down with the corridor
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.pos.y += speed;
    }

    /// Fully below the bottom of the viewport
    #[inline]
    pub fn is_expired(&self, viewport_height: f32) -> bool {
        self.pos.y - self.radius > viewport_height
    }
}

/// Horizontal range an item may spawn in at `y`, inset by the item radius
pub fn spawn_bounds(
    corridor: &Corridor,
    y: f32,
    frame: u64,
    speed: f32,
    radius: f32,
) -> (f32, f32) {
    let width = corridor.width_at(y, frame, speed);
    let center = corridor.center_x();
    (center - width / 2.0 + radius, center + width / 2.0 - radius)
}

/// Create one item of `kind` at the spawn line, at a random x inside the corridor
pub fn spawn_item<R: Rng>(
    kind: ItemKind,
    corridor: &Corridor,
    frame: u64,
    speed: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> Item {
    let y = tuning.item_spawn_y;
    let (min_x, max_x) = spawn_bounds(corridor, y, frame, speed, tuning.item_radius);
    let x = random_range(rng, min_x, max_x);

    let mut item = Item::new(kind, Vec2::new(x, y), tuning);
    if tuning.item_variants > 0 {
        item.variant = rng.random_range(0..tuning.item_variants);
    }
    item
}

/// Kinds due on this frame, beneficial first. Both fire when the frame is a
/// multiple of both intervals.
pub fn due_spawns(frame: u64, tuning: &Tuning) -> impl Iterator<Item = ItemKind> {
    let beneficial = frame % tuning.beneficial_spawn_interval == 0;
    let harmful = frame % tuning.harmful_spawn_interval == 0;
    beneficial
        .then_some(ItemKind::Beneficial)
        .into_iter()
        .chain(harmful.then_some(ItemKind::Harmful))
}
