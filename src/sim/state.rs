//! Game state and core simulation types
//!
//! One `GameState` holds the whole world for a run. It is created once, ticked
//! until the run ends, and brought back to its starting values by `reset`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::corridor::Corridor;
use super::item::{Item, ItemKind};
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advances every tick
    Running,
    /// Run ended; world frozen until reset
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player touched the corridor wall
    HitWall,
    /// Health ran out
    OutOfHealth,
}

/// Something that happened during the last tick (for audio/feedback hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { kind: ItemKind, x: f32 },
    Collected { kind: ItemKind },
    Ended { cause: EndCause },
}

/// End-of-run assessment, banded by final health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    /// 80 and up
    Great,
    /// 50 to 79
    Good,
    /// Below 50
    Low,
}

impl HealthTier {
    pub fn from_health(health: u32) -> Self {
        match health {
            80.. => HealthTier::Great,
            50..=79 => HealthTier::Good,
            _ => HealthTier::Low,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthTier::Great => "Great job! Keep maintaining your healthy habits.",
            HealthTier::Good => "Good effort! Consider improving some of your habits.",
            HealthTier::Low => {
                "Your health score is low. It's important to consult a healthcare professional."
            }
        }
    }
}

/// Frozen result of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub score: u64,
    pub health: u32,
    pub tier: HealthTier,
    pub cause: EndCause,
}

impl Summary {
    /// Report shown on the game over overlay
    pub fn report(&self) -> String {
        format!(
            "Your Score: {}\nHealth Score: {}\n{}",
            self.score,
            self.health,
            self.tier.message()
        )
    }
}

/// Read-only view for HUD/overlay display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub health: u32,
    pub phase: GamePhase,
    /// Present once the run has ended
    pub summary_text: Option<String>,
}

/// The player's marker. Only moves horizontally; the corridor scrolls past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    /// Centered in the viewport
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.viewport_width / 2.0, tuning.viewport_height / 2.0),
            radius: tuning.player_radius,
        }
    }

    /// Move by `dx`, keeping the whole circle on screen
    pub fn nudge(&mut self, dx: f32, viewport_width: f32) {
        self.pos.x += dx;
        if dx < 0.0 && self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
        }
        if dx > 0.0 && self.pos.x + self.radius > viewport_width {
            self.pos.x = viewport_width - self.radius;
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance and viewport in effect
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u64,
    /// Always within `[0, tuning.max_health]`
    pub health: u32,
    /// Scroll speed in units per tick
    pub speed: f32,
    /// Ticks simulated since the last reset
    pub frame: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub corridor: Corridor,
    pub beneficial: Vec<Item>,
    pub harmful: Vec<Item>,
    /// Set on the transition to `Ended`
    pub summary: Option<Summary>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run. Refuses tuning that cannot produce a playable corridor.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!(
            "New game {}x{} seed {}",
            tuning.viewport_width,
            tuning.viewport_height,
            seed
        );
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            health: tuning.max_health,
            speed: tuning.start_speed,
            frame: 0,
            phase: GamePhase::Running,
            player: Player::centered(&tuning),
            corridor: Corridor::new(&tuning),
            beneficial: Vec::new(),
            harmful: Vec::new(),
            summary: None,
            events: Vec::new(),
            tuning,
        })
    }

    /// Back to construction-time values and `Running`, from any state
    ///
    /// The RNG is not reseeded, so the next run lays out differently.
    pub fn reset(&mut self) {
        self.score = 0;
        self.health = self.tuning.max_health;
        self.speed = self.tuning.start_speed;
        self.frame = 0;
        self.player = Player::centered(&self.tuning);
        self.corridor = Corridor::new(&self.tuning);
        self.beneficial.clear();
        self.harmful.clear();
        self.summary = None;
        self.events.clear();
        self.phase = GamePhase::Running;
        log::info!("Game reset");
    }

    /// Adopt a new viewport size and rebuild the corridor for it.
    /// Only call between ticks.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), TuningError> {
        let tuning = Tuning {
            viewport_width: width,
            viewport_height: height,
            ..self.tuning.clone()
        };
        tuning.validate()?;
        self.tuning = tuning;

        self.corridor = Corridor::new(&self.tuning);
        let radius = self.player.radius;
        self.player.pos.x = self.player.pos.x.clamp(radius, (width - radius).max(radius));
        self.player.pos.y = height / 2.0;
        log::info!("Viewport resized to {}x{}", width, height);
        Ok(())
    }

    /// Whether ticks still advance the world
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Enter `Ended`. Only the first call per run records a summary.
    pub fn end_run(&mut self, cause: EndCause) {
        if self.phase == GamePhase::Ended {
            return;
        }
        let summary = Summary {
            score: self.score,
            health: self.health,
            tier: HealthTier::from_health(self.health),
            cause,
        };
        log::info!(
            "Run ended ({:?}): score {} health {} ({:?})",
            cause,
            summary.score,
            summary.health,
            summary.tier
        );
        self.summary = Some(summary);
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::Ended { cause });
    }

    /// Apply the effect of touching an item
    pub fn apply_pickup(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Beneficial => {
                self.score += self.tuning.beneficial_score;
                self.health = (self.health + self.tuning.beneficial_heal).min(self.tuning.max_health);
            }
            ItemKind::Harmful => {
                self.health = self.health.saturating_sub(self.tuning.harmful_damage);
            }
        }
        self.events.push(GameEvent::Collected { kind });
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            health: self.health,
            phase: self.phase,
            summary_text: self.summary.as_ref().map(Summary::report),
        }
    }

    /// All live items, beneficial first
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.beneficial.iter().chain(self.harmful.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), 12345).expect("default tuning is valid")
    }

    #[test]
    fn test_new_defaults() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.health, 100);
        assert_eq!(state.speed, 2.0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.corridor.len(), 8);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert!(state.items().next().is_none());
        assert!(state.summary.is_none());
    }

    #[test]
    fn test_new_rejects_bad_viewport() {
        let result = GameState::new(Tuning::with_viewport(800.0, -1.0), 1);
        assert!(matches!(result, Err(TuningError::InvalidViewport { .. })));
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(HealthTier::from_health(100), HealthTier::Great);
        assert_eq!(HealthTier::from_health(80), HealthTier::Great);
        assert_eq!(HealthTier::from_health(79), HealthTier::Good);
        assert_eq!(HealthTier::from_health(50), HealthTier::Good);
        assert_eq!(HealthTier::from_health(49), HealthTier::Low);
        assert_eq!(HealthTier::from_health(0), HealthTier::Low);
    }

    #[test]
    fn test_beneficial_heal_capped() {
        let mut state = new_state();
        state.health = 96;
        state.apply_pickup(ItemKind::Beneficial);
        assert_eq!(state.health, 100);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_harmful_saturates_at_zero() {
        let mut state = new_state();
        state.health = 5;
        state.apply_pickup(ItemKind::Harmful);
        assert_eq!(state.health, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_end_run_records_summary_once() {
        let mut state = new_state();
        state.score = 40;
        state.health = 60;
        state.end_run(EndCause::HitWall);

        // A later cause must not overwrite the first summary
        state.health = 0;
        state.end_run(EndCause::OutOfHealth);

        let summary = state.summary.clone().expect("ended");
        assert_eq!(summary.cause, EndCause::HitWall);
        assert_eq!(summary.tier, HealthTier::Good);
        assert_eq!(
            summary.report(),
            "Your Score: 40\nHealth Score: 60\nGood effort! Consider improving some of your habits."
        );
        assert_eq!(
            state.events,
            vec![GameEvent::Ended {
                cause: EndCause::HitWall
            }]
        );
    }

    #[test]
    fn test_snapshot() {
        let mut state = new_state();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert!(snapshot.summary_text.is_none());

        state.end_run(EndCause::OutOfHealth);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Ended);
        assert!(snapshot.summary_text.unwrap().starts_with("Your Score: 0\n"));
    }

    #[test]
    fn test_player_nudge_clamps_to_viewport() {
        let mut player = Player {
            pos: Vec2::new(22.0, 300.0),
            radius: 20.0,
        };
        player.nudge(-4.0, 800.0);
        assert_eq!(player.pos.x, 20.0);

        player.pos.x = 778.0;
        player.nudge(4.0, 800.0);
        assert_eq!(player.pos.x, 780.0);
    }

    #[test]
    fn test_resize_rebuilds_corridor() {
        let mut state = new_state();
        state.resize(1000.0, 900.0).expect("valid size");
        assert_eq!(state.corridor.len(), 11);
        assert!(state.corridor.segments().iter().all(|s| s.width == 600.0));
        assert_eq!(state.player.pos.y, 450.0);

        // Invalid sizes leave the state untouched
        assert!(state.resize(0.0, 900.0).is_err());
        assert_eq!(state.tuning.viewport_width, 1000.0);
    }
}
