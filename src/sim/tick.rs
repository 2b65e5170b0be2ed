//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by exactly one frame.

use super::collision::circles_overlap;
use super::item::{Item, ItemKind, due_spawns, spawn_item};
use super::state::{EndCause, GameEvent, GameState};

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left this tick
    pub left: bool,
    /// Move right this tick
    pub right: bool,
}

/// Advance the game state by one tick
///
/// Order: spawn, scroll corridor, move player, wall check, move items,
/// resolve pickups, ramp speed.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    state.events.clear();

    spawn_due_items(state);

    // Scroll the corridor
    state.corridor.advance(state.speed);
    state.corridor.recycle(&mut state.rng);

    // Player movement
    let step = state.tuning.player_step;
    let viewport_width = state.tuning.viewport_width;
    if input.left {
        state.player.nudge(-step, viewport_width);
    }
    if input.right {
        state.player.nudge(step, viewport_width);
    }

    // Wall check at the player's (fixed) height
    if let Some(segment) = state.corridor.segment_at(state.player.pos.y) {
        let min_x = segment.left + state.player.radius;
        let max_x = segment.right - state.player.radius;
        let x = state.player.pos.x;
        if x < min_x || x > max_x {
            log::debug!("Player x={} outside corridor [{}, {}]", x, min_x, max_x);
            state.end_run(EndCause::HitWall);
        }
    }

    // Items scroll with the corridor
    let speed = state.speed;
    for item in state.beneficial.iter_mut().chain(state.harmful.iter_mut()) {
        item.advance(speed);
    }

    resolve_items(state, ItemKind::Beneficial);
    resolve_items(state, ItemKind::Harmful);
    if state.health == 0 {
        state.end_run(EndCause::OutOfHealth);
    }

    state.speed += state.tuning.speed_ramp;
    state.frame += 1;
}

fn spawn_due_items(state: &mut GameState) {
    let kinds: Vec<ItemKind> = due_spawns(state.frame, &state.tuning).collect();
    for kind in kinds {
        let item = spawn_item(
            kind,
            &state.corridor,
            state.frame,
            state.speed,
            &state.tuning,
            &mut state.rng,
        );
        log::debug!("Spawned {:?} at x={} (frame {})", kind, item.pos.x, state.frame);
        state.events.push(GameEvent::Spawned {
            kind,
            x: item.pos.x,
        });
        match kind {
            ItemKind::Beneficial => state.beneficial.push(item),
            ItemKind::Harmful => state.harmful.push(item),
        }
    }
}

/// Collect touched items of one kind and drop the ones that fell off screen
fn resolve_items(state: &mut GameState, kind: ItemKind) {
    let items = match kind {
        ItemKind::Beneficial => std::mem::take(&mut state.beneficial),
        ItemKind::Harmful => std::mem::take(&mut state.harmful),
    };

    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let viewport_height = state.tuning.viewport_height;

    let mut kept: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        if circles_overlap(player_pos, player_radius, item.pos, item.radius) {
            state.apply_pickup(kind);
            log::debug!(
                "Picked up {:?}: score {} health {}",
                kind,
                state.score,
                state.health
            );
        } else if !item.is_expired(viewport_height) {
            kept.push(item);
        }
    }

    match kind {
        ItemKind::Beneficial => state.beneficial = kept,
        ItemKind::Harmful => state.harmful = kept,
    }
}
