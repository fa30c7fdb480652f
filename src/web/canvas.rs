use crate::renderer::{color::Rgba, surface::Surface};
use anyhow::{anyhow, Context};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Surface`] backed by a `<canvas>` 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("failed to get 2d context: {e:?}"))?
            .context("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("not a 2d context"))?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }
}
