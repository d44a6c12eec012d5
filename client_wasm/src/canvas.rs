//! 2D canvas drawing surface

use std::f64::consts::TAU;

use game_core::{Color, RenderError, Surface};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn surface_error(op: &'static str) -> impl FnOnce(JsValue) -> RenderError {
    move |e| RenderError::Surface {
        op,
        reason: format!("{:?}", e),
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<(), RenderError> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .map_err(surface_error("arc"))?;
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px fantasy", size_px));
        self.ctx
            .fill_text(text, pos.x as f64, pos.y as f64)
            .map_err(surface_error("fill_text"))
    }
}
