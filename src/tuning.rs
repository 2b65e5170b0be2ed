//! Data-driven game balance
//!
//! Every gameplay number lives here so a host can load a JSON override.
//! Missing fields fall back to the values in `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Game balance and viewport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Corridor ===
    pub segment_height: f32,
    /// Initial corridor width as a fraction of viewport width
    pub initial_width_ratio: f64,
    /// Max width change (±) for each new segment
    pub width_jitter: f32,
    pub min_corridor_width: f32,
    /// Corridor width is capped at `viewport_width - corridor_edge_margin`
    pub corridor_edge_margin: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_step: f32,

    // === Items ===
    pub item_radius: f32,
    pub item_size: f32,
    pub item_spawn_y: f32,
    pub item_variants: u8,
    pub beneficial_spawn_interval: u64,
    pub harmful_spawn_interval: u64,

    // === Scoring ===
    pub beneficial_score: u64,
    pub beneficial_heal: u32,
    pub harmful_damage: u32,
    pub max_health: u32,

    // === Speed ===
    pub start_speed: f32,
    pub speed_ramp: f32,

    // === Tips ===
    pub tip_interval_ticks: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            segment_height: SEGMENT_HEIGHT,
            initial_width_ratio: INITIAL_WIDTH_RATIO,
            width_jitter: WIDTH_JITTER,
            min_corridor_width: MIN_CORRIDOR_WIDTH,
            corridor_edge_margin: CORRIDOR_EDGE_MARGIN,

            player_radius: PLAYER_RADIUS,
            player_step: PLAYER_STEP,

            item_radius: ITEM_RADIUS,
            item_size: ITEM_SIZE,
            item_spawn_y: ITEM_SPAWN_Y,
            item_variants: ITEM_VARIANTS,
            beneficial_spawn_interval: BENEFICIAL_SPAWN_INTERVAL,
            harmful_spawn_interval: HARMFUL_SPAWN_INTERVAL,

            beneficial_score: BENEFICIAL_SCORE,
            beneficial_heal: BENEFICIAL_HEAL,
            harmful_damage: HARMFUL_DAMAGE,
            max_health: MAX_HEALTH,

            start_speed: START_SPEED,
            speed_ramp: SPEED_RAMP,

            tip_interval_ticks: TIP_INTERVAL_TICKS,
        }
    }
}

impl Tuning {
    /// Default balance for a given viewport size
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Parse a JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Widest the corridor is allowed to get
    #[inline]
    pub fn max_corridor_width(&self) -> f32 {
        self.viewport_width - self.corridor_edge_margin
    }

    /// Corridor width used for a freshly built corridor
    ///
    /// Multiplied in f64: `800.0f32 * 0.6f32` rounds to 480.00003.
    #[inline]
    pub fn initial_corridor_width(&self) -> f32 {
        (self.viewport_width as f64 * self.initial_width_ratio) as f32
    }

    /// Check that a corridor and items can actually be built with these numbers
    pub fn validate(&self) -> Result<(), TuningError> {
        let (width, height) = (self.viewport_width, self.viewport_height);
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(TuningError::InvalidViewport { width, height });
        }
        if !(self.segment_height > 0.0) {
            return Err(TuningError::InvalidSegmentHeight(self.segment_height));
        }
        for (name, value) in [
            ("player radius", self.player_radius),
            ("player step", self.player_step),
            ("item radius", self.item_radius),
            ("start speed", self.start_speed),
            ("min corridor width", self.min_corridor_width),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if !(self.speed_ramp >= 0.0) || !self.speed_ramp.is_finite() {
            return Err(TuningError::InvalidSpeedRamp(self.speed_ramp));
        }
        if self.max_health == 0 {
            return Err(TuningError::ZeroMaxHealth);
        }
        if self.max_corridor_width() < self.min_corridor_width {
            return Err(TuningError::ViewportTooNarrow {
                viewport_width: width,
                min_width: self.min_corridor_width,
                margin: self.corridor_edge_margin,
            });
        }
        if self.beneficial_spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval("beneficial"));
        }
        if self.harmful_spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval("harmful"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_negative_viewport() {
        let tuning = Tuning::with_viewport(-800.0, 600.0);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_rejects_narrow_viewport() {
        // 250 - 100 < 200: no legal corridor width exists
        let tuning = Tuning::with_viewport(250.0, 600.0);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ViewportTooNarrow { .. })
        ));
    }

    #[test]
    fn test_initial_width_is_exact() {
        assert_eq!(Tuning::with_viewport(800.0, 600.0).initial_corridor_width(), 480.0);
        assert_eq!(Tuning::with_viewport(1000.0, 600.0).initial_corridor_width(), 600.0);
    }

    #[test]
    fn test_rejects_negative_speed_ramp() {
        assert!(matches!(
            Tuning::from_json(r#"{ "speed_ramp": -0.01 }"#),
            Err(TuningError::InvalidSpeedRamp(_))
        ));
        let tuning = Tuning {
            speed_ramp: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidSpeedRamp(_))
        ));
        // A flat speed is allowed
        assert!(Tuning::from_json(r#"{ "speed_ramp": 0.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_player_step() {
        assert!(matches!(
            Tuning::from_json(r#"{ "player_step": 0.0 }"#),
            Err(TuningError::NonPositive {
                name: "player step",
                ..
            })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "player_step": -4.0 }"#),
            Err(TuningError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_max_health() {
        assert_eq!(
            Tuning::from_json(r#"{ "max_health": 0 }"#),
            Err(TuningError::ZeroMaxHealth)
        );
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "viewport_width": 1024, "speed_ramp": 0.001 }"#)
            .expect("valid json");
        assert_eq!(tuning.viewport_width, 1024.0);
        assert_eq!(tuning.speed_ramp, 0.001);
        assert_eq!(tuning.segment_height, SEGMENT_HEIGHT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "harmful_spawn_interval": 0 }"#),
            Err(TuningError::ZeroSpawnInterval("harmful"))
        ));
    }
}
