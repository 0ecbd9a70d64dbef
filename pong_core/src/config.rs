use crate::components::Side;
use glam::Vec2;

/// Fixed tuning parameters, in logical field units
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (design space; device size is this times the scale factor)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_SPEED: f32 = 10.0; // units per tick
    pub const PADDLE_MARGIN: f32 = 5.0; // gap between paddle and side wall

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 23.0;
    pub const BALL_SPEED_STEP: f32 = 0.5; // added on every front paddle hit

    // Timing
    pub const COUNTDOWN_MS: f64 = 3000.0;
    pub const TICK_MS: f64 = 1000.0 / 60.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_step: f32,
    pub countdown_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_step: Params::BALL_SPEED_STEP,
            countdown_ms: Params::COUNTDOWN_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// X coordinate separating the two halves of the field
    pub fn midline(&self) -> f32 {
        self.field_width / 2.0
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp paddle Y (top edge) so the paddle stays inside the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }
}
