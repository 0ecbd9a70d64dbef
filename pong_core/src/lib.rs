pub mod components;
pub mod config;
pub mod input;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use systems::*;

/// Advance the Pong simulation by one fixed tick.
///
/// Order matters: a pending serve is resolved first, then the ball moves and
/// bounces off the walls, then scoring is checked, then the ball is resolved
/// against the paddle on its half of the field, and finally the paddles move.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Pending serve: hold the ball through the countdown, then launch it
    serve_ball(world, time, config, rng);

    // 2. Move ball (top/bottom wall reflection included)
    move_ball(world, config, events);

    // 3. Check scoring (ball crossed the left/right edge)
    check_scoring(world, time, config, events);

    // 4. Ball vs the near paddle
    check_paddle_collision(world, config, events);

    // 5. Move paddles based on intents
    move_paddles(world, config);
}
