use crate::{overlaps, Config, Events, Side, World};
use std::f32::consts::FRAC_PI_4;

/// Resolve the ball against the paddle on its half of the field.
///
/// Only the near paddle is ever tested (x past the midline selects the right
/// paddle, otherwise the left one); the far paddle is ignored. This is a
/// deliberate simplification, not a bug: the ball can only reach a paddle on
/// its own half of the field.
///
/// On overlap, exactly one of three cases fires, in order:
/// 1. Front hit — the ball's leading edge is within one ball diameter of the
///    paddle's facing edge and the ball is moving toward the paddle. The
///    contact point maps to a bounce angle in [-45°, 45°] and the scalar
///    speed grows by one step, capped at the maximum.
/// 2. Top-surface hit — moving down onto the paddle's top edge: reflect.
/// 3. Bottom-surface hit — moving up into the paddle's bottom edge: reflect.
pub fn check_paddle_collision(world: &mut World, config: &Config, events: &mut Events) {
    let paddle = if world.ball.pos.x > config.midline() {
        world.right
    } else {
        world.left
    };
    let ball = &mut world.ball;

    if !overlaps(ball, &paddle) {
        return;
    }
    events.ball_hit_paddle = true;

    let (facing_gap, toward, dir) = match paddle.side {
        Side::Left => ((ball.left() - paddle.right()).abs(), ball.vel.x < 0.0, 1.0),
        Side::Right => ((ball.right() - paddle.left()).abs(), ball.vel.x > 0.0, -1.0),
    };

    if facing_gap < ball.diameter() && toward {
        // Contact point on the paddle, normalized to [-1, 1] top to bottom
        let collide_point =
            ((ball.pos.y - paddle.center_y()) / (paddle.size.y / 2.0)).clamp(-1.0, 1.0);
        let angle = collide_point * FRAC_PI_4;

        ball.vel.x = dir * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed = (ball.speed + config.ball_speed_step).min(config.ball_speed_max);
    } else if (ball.bottom() - paddle.top()).abs() < ball.diameter() && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
    } else if (ball.top() - paddle.bottom()).abs() < ball.diameter() && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
    }
}
