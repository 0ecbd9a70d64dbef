use crate::{Config, Events, Time, World};

/// Award a point when the ball crosses the left or right edge.
///
/// Each score arms the serve countdown at the current tick's timestamp; the
/// ball itself is recentered by the serve system on the next tick. The two
/// edges are checked independently, not as an either/or.
pub fn check_scoring(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    if world.ball.left() <= 0.0 {
        world.right.score += 1;
        world.serve.arm(time.now_ms);
        events.right_scored = true;
    }
    if world.ball.right() >= config.field_width {
        world.left.score += 1;
        world.serve.arm(time.now_ms);
        events.left_scored = true;
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
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(world.ball.radius - 1.0, 300.0);

        check_scoring(&mut world, &Time::new(5000.0), &config, &mut events);

        assert_eq!(world.right.score, 1, "Right player should score");
        assert_eq!(world.left.score, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(world.serve.pending(), "Score arms the countdown");
        assert_eq!(world.serve.elapsed(5000.0), Some(0.0), "Armed at now");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(config.field_width - world.ball.radius + 1.0, 300.0);

        check_scoring(&mut world, &Time::new(5000.0), &config, &mut events);

        assert_eq!(world.left.score, 1, "Left player should score");
        assert_eq!(world.right.score, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
        assert!(world.serve.pending(), "Score arms the countdown");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut events) = setup();
        world.ball.pos = Vec2::new(500.0, 300.0);

        check_scoring(&mut world, &Time::new(5000.0), &config, &mut events);

        assert_eq!(world.left.score, 0);
        assert_eq!(world.right.score, 0);
        assert!(!events.scored(), "No scoring events");
        assert!(!world.serve.pending());
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut world, config, mut events) = setup();

        world.ball.pos = Vec2::new(0.0, 300.0);
        check_scoring(&mut world, &Time::new(1000.0), &config, &mut events);
        world.serve.clear();
        events.clear();

        world.ball.pos = Vec2::new(0.0, 300.0);
        check_scoring(&mut world, &Time::new(2000.0), &config, &mut events);

        assert_eq!(world.right.score, 2, "Scores should accumulate");
        assert_eq!(world.left.score, 0);
    }
}
