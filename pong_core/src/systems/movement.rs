use crate::{Config, Events, World};

/// Advance the ball by its velocity, reflecting off the top and bottom walls.
///
/// On wall contact the ball is clamped back inside the field before the
/// vertical velocity flips, so it can never tunnel out or get stuck.
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    let ball = &mut world.ball;
    ball.pos += ball.vel;

    if ball.top() <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    } else if ball.bottom() >= config.field_height {
        ball.pos.y = config.field_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Apply paddle velocity intents, clamping each paddle to the field
pub fn move_paddles(world: &mut World, config: &Config) {
    for paddle in [&mut world.left, &mut world.right] {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + paddle.dv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (World, Config, Events) {
        let config = Config::new();
        let mut world = World::new(&config, 0.0);
        world.serve.clear();
        let events = Events::new();
        (world, config, events)
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(400.0, 300.0);
        world.ball.vel = Vec2::new(6.0, -2.0);

        move_ball(&mut world, &config, &mut events);

        assert_eq!(world.ball.pos, Vec2::new(406.0, 298.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(400.0, world.ball.radius + 1.0);
        world.ball.vel = Vec2::new(4.0, -6.0); // Moving up

        move_ball(&mut world, &config, &mut events);

        assert_eq!(
            world.ball.pos.y, world.ball.radius,
            "Ball clamped to the top wall"
        );
        assert!(world.ball.vel.y > 0.0, "Vertical velocity flipped downward");
        assert_eq!(world.ball.vel.x, 4.0, "Horizontal velocity unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(400.0, config.field_height - world.ball.radius - 1.0);
        world.ball.vel = Vec2::new(4.0, 6.0); // Moving down

        move_ball(&mut world, &config, &mut events);

        assert_eq!(
            world.ball.pos.y,
            config.field_height - world.ball.radius,
            "Ball clamped to the bottom wall"
        );
        assert!(world.ball.vel.y < 0.0, "Vertical velocity flipped upward");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_paddles_move_by_intent() {
        let (mut world, config, _) = setup();
        world.left.dv = -world.left.speed;
        world.right.dv = world.right.speed;
        let left_y = world.left.pos.y;
        let right_y = world.right.pos.y;

        move_paddles(&mut world, &config);

        assert_eq!(world.left.pos.y, left_y - world.left.speed);
        assert_eq!(world.right.pos.y, right_y + world.right.speed);
    }

    #[test]
    fn test_paddles_clamp_to_field() {
        let (mut world, config, _) = setup();

        world.left.pos.y = 3.0;
        world.left.dv = -world.left.speed;
        move_paddles(&mut world, &config);
        assert_eq!(world.left.pos.y, 0.0, "Top edge clamps at zero");

        world.right.pos.y = config.field_height - world.right.size.y - 3.0;
        world.right.dv = world.right.speed;
        move_paddles(&mut world, &config);
        assert_eq!(
            world.right.bottom(),
            config.field_height,
            "Bottom edge clamps at the field height"
        );
    }

    #[test]
    fn test_idle_paddles_stay_put() {
        let (mut world, config, _) = setup();
        let left_y = world.left.pos.y;

        move_paddles(&mut world, &config);

        assert_eq!(world.left.pos.y, left_y);
    }
}
