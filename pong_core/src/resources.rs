/// Wall-clock time for the current tick, in milliseconds.
///
/// The driver samples the platform clock once per tick; the systems never
/// read a clock themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64,
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

/// Pending-serve state.
///
/// Holds the timestamp of the most recent score event while the three second
/// countdown runs; `None` means play is live.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    score_time_ms: Option<f64>,
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score event at `now_ms` and start the countdown
    pub fn arm(&mut self, now_ms: f64) {
        self.score_time_ms = Some(now_ms);
    }

    pub fn clear(&mut self) {
        self.score_time_ms = None;
    }

    pub fn pending(&self) -> bool {
        self.score_time_ms.is_some()
    }

    /// Milliseconds since the score event, if a serve is pending
    pub fn elapsed(&self, now_ms: f64) -> Option<f64> {
        self.score_time_ms.map(|t| now_ms - t)
    }

    /// The digit to display during the countdown window: 3, 2, then 1
    pub fn countdown_digit(&self, now_ms: f64) -> Option<u8> {
        match self.elapsed(now_ms)? {
            e if e < 1000.0 => Some(3),
            e if e < 2000.0 => Some(2),
            e if e < 3000.0 => Some(1),
            _ => None,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Random number generator, seeded by the driver
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_state_starts_inactive() {
        let serve = ServeState::new();
        assert!(!serve.pending());
        assert_eq!(serve.elapsed(5000.0), None);
        assert_eq!(serve.countdown_digit(5000.0), None);
    }

    #[test]
    fn test_serve_arm_and_clear() {
        let mut serve = ServeState::new();
        serve.arm(1000.0);
        assert!(serve.pending());
        assert_eq!(serve.elapsed(1500.0), Some(500.0));

        serve.clear();
        assert!(!serve.pending());
    }

    #[test]
    fn test_countdown_digit_phases() {
        let mut serve = ServeState::new();
        serve.arm(10_000.0);

        assert_eq!(serve.countdown_digit(10_000.0), Some(3));
        assert_eq!(serve.countdown_digit(10_999.0), Some(3));
        assert_eq!(serve.countdown_digit(11_000.0), Some(2));
        assert_eq!(serve.countdown_digit(12_000.0), Some(1));
        assert_eq!(
            serve.countdown_digit(13_000.0),
            None,
            "No digit once the window has elapsed"
        );
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.scored());
    }

    #[test]
    fn test_game_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.0.gen_bool(0.5), b.0.gen_bool(0.5));
        }
    }
}
