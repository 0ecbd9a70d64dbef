//! `Surface` implementation over the browser's 2D canvas context.

use pong_core::render::{Color, Surface};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        // arc only fails on a negative radius, which the renderer never passes
        let _ = self
            .ctx
            .arc(f64::from(x), f64::from(y), f64::from(radius), 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.set_fill(color);
        self.ctx.set_font(&format!("{}px Arial", size));
        let _ = self.ctx.fill_text(text, f64::from(x), f64::from(y));
    }
}
