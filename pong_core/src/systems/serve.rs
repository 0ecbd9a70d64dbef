use crate::{Config, GameRng, Time, World};
use glam::Vec2;
use rand::Rng;

/// Resolve a pending serve.
///
/// While the countdown runs the ball is held frozen at the field center.
/// Once the window has elapsed the ball launches horizontally at the initial
/// speed, in a uniformly random direction, and the pending flag clears.
pub fn serve_ball(world: &mut World, time: &Time, config: &Config, rng: &mut GameRng) {
    let elapsed = match world.serve.elapsed(time.now_ms) {
        Some(elapsed) => elapsed,
        None => return,
    };

    world.ball.pos = config.field_center();

    if elapsed < config.countdown_ms {
        world.ball.vel = Vec2::ZERO;
    } else {
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        world.ball.speed = config.ball_speed_initial;
        world.ball.vel = Vec2::new(world.ball.speed * dir, 0.0);
        world.serve.clear();
    }
}
