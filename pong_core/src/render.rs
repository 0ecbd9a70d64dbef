//! Stateless per-frame painting over an abstract 2D surface.
//!
//! The renderer works entirely in logical field units and multiplies every
//! coordinate by the scale factor before handing it to the surface, so the
//! same frame can paint at any device size.

use crate::{Config, Time, World};

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const LEFT_PADDLE: Color = Color::rgb(0xC3, 0x22, 0xFF);
    pub const RIGHT_PADDLE: Color = Color::rgb(0x0A, 0xC9, 0xFC);

    /// CSS hex form, e.g. `#C322FF`
    pub fn to_css(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The raster operations a frame needs, in device coordinates.
///
/// Implemented by the browser shell over the 2D canvas context, and by a
/// recording surface in tests. Text is anchored at its left baseline, circle
/// coordinates are the center, everything else is top-left plus extent.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

// Layout, in logical units relative to the field
const TEXT_SIZE: f32 = 50.0;
const SCORE_Y: f32 = 50.0;
const LEFT_SCORE_OFFSET: f32 = -55.0;
const RIGHT_SCORE_OFFSET: f32 = 30.0;
const DIVIDER_WIDTH: f32 = 1.0;
const COUNTDOWN_OFFSET_X: f32 = -15.0;
const COUNTDOWN_OFFSET_Y: f32 = 60.0;

/// Paint one frame: background, divider, paddles, scores, ball, and the
/// countdown digit while a serve is pending.
pub fn draw(
    surface: &mut impl Surface,
    world: &World,
    time: &Time,
    config: &Config,
    scale: f32,
) {
    let w = config.field_width;
    let h = config.field_height;

    surface.clear(w * scale, h * scale);
    surface.fill_rect(0.0, 0.0, w * scale, h * scale, Color::BLACK);
    surface.fill_rect(
        config.midline() * scale,
        0.0,
        DIVIDER_WIDTH * scale,
        h * scale,
        Color::WHITE,
    );

    for paddle in [&world.left, &world.right] {
        surface.fill_rect(
            paddle.pos.x * scale,
            paddle.pos.y * scale,
            paddle.size.x * scale,
            paddle.size.y * scale,
            paddle.color,
        );
    }

    surface.fill_text(
        &world.left.score.to_string(),
        (config.midline() + LEFT_SCORE_OFFSET) * scale,
        SCORE_Y * scale,
        TEXT_SIZE * scale,
        Color::WHITE,
    );
    surface.fill_text(
        &world.right.score.to_string(),
        (config.midline() + RIGHT_SCORE_OFFSET) * scale,
        SCORE_Y * scale,
        TEXT_SIZE * scale,
        Color::WHITE,
    );

    surface.fill_circle(
        world.ball.pos.x * scale,
        world.ball.pos.y * scale,
        world.ball.radius * scale,
        world.ball.color,
    );

    if let Some(digit) = world.serve.countdown_digit(time.now_ms) {
        surface.fill_text(
            &digit.to_string(),
            (config.midline() + COUNTDOWN_OFFSET_X) * scale,
            (h / 2.0 + COUNTDOWN_OFFSET_Y) * scale,
            TEXT_SIZE * scale,
            Color::RED,
        );
    }
}
