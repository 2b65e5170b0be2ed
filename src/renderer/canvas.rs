//! HTML canvas 2D implementation of `RenderSurface`

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{HUD_FONT, RenderSurface, SpriteId};

/// Canvas context plus the item sprites it has started loading
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprites: HashMap<SpriteId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Bind to `canvas` and start loading `variants` sprites per item kind
    pub fn new(canvas: &HtmlCanvasElement, variants: u8) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut sprites = HashMap::new();
        for sprite in SpriteId::all(variants) {
            let image = HtmlImageElement::new()?;
            image.set_src(&sprite.asset_path());
            sprites.insert(sprite, image);
        }
        log::info!("Preloading {} item sprites", sprites.len());

        Ok(Self { ctx, sprites })
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_sprite(&mut self, sprite: SpriteId, center: Vec2, size: Vec2) -> bool {
        let Some(image) = self.sprites.get(&sprite) else {
            return false;
        };
        // `complete` is also true for a broken image; natural_width catches that
        if !image.complete() || image.natural_width() == 0 {
            return false;
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                (center.x - size.x / 2.0) as f64,
                (center.y - size.y / 2.0) as f64,
                size.x as f64,
                size.y as f64,
            )
            .is_ok()
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
