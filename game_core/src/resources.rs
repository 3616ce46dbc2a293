use glam::Vec2;

use crate::{Rect, Side};

/// Random number generator
///
/// Passed explicitly into everything that rolls dice so tests can seed it.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
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
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Side that scored this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Up/down signals for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }
}

/// Per-tick input for both paddles. AI paddles ignore theirs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_side(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, input: PaddleInput) {
        match side {
            Side::Left => self.left = input,
            Side::Right => self.right = input,
        }
    }
}

/// Read-only view of a match for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub ball: Rect,
    pub ball_vel: Vec2,
    pub paddle_left: Rect,
    pub paddle_right: Rect,
    pub score_left: u32,
    pub score_right: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_events_scorer() {
        let mut events = Events::new();
        assert_eq!(events.scorer(), None);
        events.right_scored = true;
        assert_eq!(events.scorer(), Some(Side::Right));
    }

    #[test]
    fn test_input_state_per_side() {
        let mut input = InputState::new();
        input.set(Side::Right, PaddleInput::new(true, false));

        assert_eq!(input.for_side(Side::Left), PaddleInput::default());
        assert_eq!(input.for_side(Side::Right), PaddleInput::new(true, false));
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
