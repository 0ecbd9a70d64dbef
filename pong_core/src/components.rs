use crate::config::Config;
use crate::render::Color;
use crate::resources::ServeState;
use glam::Vec2;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The pong ball.
///
/// `speed` is the scalar magnitude used to re-aim the velocity on paddle
/// hits; it only grows between serves and resets on respawn. Edges are
/// always derived from position and radius, never stored.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.field_center(),
            vel: Vec2::new(-config.ball_speed_initial, 0.0),
            radius: config.ball_radius,
            speed: config.ball_speed_initial,
            color: Color::WHITE,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// A player's paddle. X is fixed near its wall; only Y ever moves.
///
/// `dv` is the velocity intent written by the input mapper (-speed, 0 or
/// +speed); the score is monotonically non-decreasing.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub dv: f32,
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(
                config.paddle_x(side),
                (config.field_height - config.paddle_height) / 2.0,
            ),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            dv: 0.0,
            score: 0,
            color: match side {
                Side::Left => Color::LEFT_PADDLE,
                Side::Right => Color::RIGHT_PADDLE,
            },
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// AABB overlap test between the ball's bounding box and a paddle
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.left()
        && ball.bottom() > paddle.top()
        && ball.left() < paddle.right()
        && ball.top() < paddle.bottom()
}

/// All mutable game state, owned by the loop and passed by reference to the
/// update and render steps.
#[derive(Debug, Clone)]
pub struct World {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub serve: ServeState,
}

impl World {
    /// Create the initial state. The match opens with a serve countdown, so
    /// the first ball launch happens three seconds after `now_ms`.
    pub fn new(config: &Config, now_ms: f64) -> Self {
        let mut serve = ServeState::new();
        serve.arm(now_ms);
        Self {
            ball: Ball::new(config),
            left: Paddle::new(Side::Left, config),
            right: Paddle::new(Side::Right, config),
            serve,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
