//! Frame rendering
//!
//! The simulation never draws. A host hands `draw_frame` something that
//! implements `RenderSurface` (a 2D canvas on the web) and it issues the draw
//! calls for corridor, player, items and HUD, in that order.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::sim::{GameState, ItemKind};

/// Corridor fill
pub const CORRIDOR_COLOR: &str = "#a5d6a7";
/// Player marker
pub const PLAYER_COLOR: &str = "#4caf50";
/// Fallback circle for a beneficial item whose sprite isn't loaded
pub const BENEFICIAL_FALLBACK_COLOR: &str = "#ffeb3b";
/// Fallback circle for a harmful item whose sprite isn't loaded
pub const HARMFUL_FALLBACK_COLOR: &str = "#e57373";
pub const HUD_COLOR: &str = "#000";
pub const HUD_FONT: &str = "20px Arial";

/// Which sprite to draw for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId {
    pub kind: ItemKind,
    pub variant: u8,
}

impl SpriteId {
    /// Relative image path, e.g. `images/good/good1.png`
    pub fn asset_path(&self) -> String {
        let prefix = self.kind.asset_prefix();
        format!("images/{}/{}{}.png", prefix, prefix, self.variant as u32 + 1)
    }

    /// Every sprite the spawner can pick with `variants` variants per kind
    pub fn all(variants: u8) -> impl Iterator<Item = SpriteId> {
        [ItemKind::Beneficial, ItemKind::Harmful]
            .into_iter()
            .flat_map(move |kind| (0..variants).map(move |variant| SpriteId { kind, variant }))
    }
}

/// Minimal 2D drawing capability the game needs
pub trait RenderSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Draw a sprite centered at `center`. Returns false if the image is not
    /// ready yet, in which case the caller draws a fallback.
    fn draw_sprite(&mut self, sprite: SpriteId, center: Vec2, size: Vec2) -> bool;
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}

/// Draw one frame of the current state
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, state: &GameState) {
    let tuning = &state.tuning;
    surface.clear(tuning.viewport_width, tuning.viewport_height);

    let segment_height = state.corridor.segment_height();
    for segment in state.corridor.segments() {
        surface.fill_rect(
            segment.left,
            segment.y,
            segment.width,
            segment_height,
            CORRIDOR_COLOR,
        );
    }

    surface.fill_circle(state.player.pos, state.player.radius, PLAYER_COLOR);

    for item in state.items() {
        let sprite = SpriteId {
            kind: item.kind,
            variant: item.variant,
        };
        if !surface.draw_sprite(sprite, item.pos, item.size) {
            let color = match item.kind {
                ItemKind::Beneficial => BENEFICIAL_FALLBACK_COLOR,
                ItemKind::Harmful => HARMFUL_FALLBACK_COLOR,
            };
            surface.fill_circle(item.pos, item.radius, color);
        }
    }

    surface.fill_text(&format!("Score: {}", state.score), 10.0, 30.0, HUD_COLOR);
    surface.fill_text(&format!("Health: {}", state.health), 10.0, 60.0, HUD_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Item;
    use crate::tuning::Tuning;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Rect(&'static str),
        Circle(String),
        Sprite(SpriteId),
        Text(String),
    }

    /// Records calls; sprites are "loaded" only for beneficial items
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self, _: f32, _: f32) {
            self.cmds.push(Cmd::Clear);
        }
        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: &str) {
            self.cmds.push(Cmd::Rect("corridor"));
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, color: &str) {
            self.cmds.push(Cmd::Circle(color.to_string()));
        }
        fn draw_sprite(&mut self, sprite: SpriteId, _: Vec2, _: Vec2) -> bool {
            if sprite.kind == ItemKind::Beneficial {
                self.cmds.push(Cmd::Sprite(sprite));
                true
            } else {
                false
            }
        }
        fn fill_text(&mut self, text: &str, _: f32, _: f32, _: &str) {
            self.cmds.push(Cmd::Text(text.to_string()));
        }
    }

    #[test]
    fn test_draw_order_and_fallback() {
        let mut state = GameState::new(Tuning::default(), 1).expect("valid");
        state.score = 30;
        state.health = 85;
        let good = Item::new(ItemKind::Beneficial, Vec2::new(300.0, 50.0), &state.tuning);
        let bad = Item::new(ItemKind::Harmful, Vec2::new(500.0, 50.0), &state.tuning);
        state.beneficial.push(good);
        state.harmful.push(bad);

        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &state);

        let mut expected = vec![Cmd::Clear];
        expected.extend(std::iter::repeat_n(Cmd::Rect("corridor"), 8));
        expected.push(Cmd::Circle(PLAYER_COLOR.to_string()));
        expected.push(Cmd::Sprite(SpriteId {
            kind: ItemKind::Beneficial,
            variant: 0,
        }));
        expected.push(Cmd::Circle(HARMFUL_FALLBACK_COLOR.to_string()));
        expected.push(Cmd::Text("Score: 30".to_string()));
        expected.push(Cmd::Text("Health: 85".to_string()));
        assert_eq!(recorder.cmds, expected);
    }

    #[test]
    fn test_asset_paths() {
        let good = SpriteId {
            kind: ItemKind::Beneficial,
            variant: 0,
        };
        let bad = SpriteId {
            kind: ItemKind::Harmful,
            variant: 2,
        };
        assert_eq!(good.asset_path(), "images/good/good1.png");
        assert_eq!(bad.asset_path(), "images/bad/bad3.png");
    }

    #[test]
    fn test_sprite_set_follows_tuning_variants() {
        let tuning = Tuning {
            item_variants: 5,
            ..Tuning::default()
        };
        let sprites: Vec<SpriteId> = SpriteId::all(tuning.item_variants).collect();
        assert_eq!(sprites.len(), 10);
        let paths: Vec<String> = sprites.iter().map(SpriteId::asset_path).collect();
        assert!(paths.contains(&"images/good/good5.png".to_string()));
        assert!(paths.contains(&"images/bad/bad5.png".to_string()));
        assert!(SpriteId::all(0).next().is_none());
    }

}
