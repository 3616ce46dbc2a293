use glam::Vec2;
use rand::Rng;

use crate::{Config, Difficulty, GameMap, GameRng, Rect};

/// Which end of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Player component - name and running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub side: Side,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            score: 0,
        }
    }
}

/// Paddle component - a player's paddle rectangle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Controller {
    Human,
    Ai(AiController),
}

impl Controller {
    pub fn is_ai(&self) -> bool {
        matches!(self, Controller::Ai(_))
    }
}

/// AI opponent; holds nothing but its difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    pub difficulty: Difficulty,
}

impl AiController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

/// Held paddle keys for a human paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Create a ball already served from the centre
    pub fn spawn(map: &GameMap, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(map.ball_spawn(config.ball_size), Vec2::ZERO);
        ball.reset(map, config, rng);
        ball
    }

    /// Re-centre the ball and serve it in a random direction.
    ///
    /// Horizontal speed is always exactly `ball_speed`, left or right with
    /// equal chance. Vertical speed is uniform in `[-ball_speed, ball_speed]`.
    pub fn reset(&mut self, map: &GameMap, config: &Config, rng: &mut GameRng) {
        self.rect = map.ball_spawn(config.ball_size);

        let speed = config.ball_speed;
        let dx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let dy = rng.0.gen_range(-speed..=speed);
        self.vel = Vec2::new(dx, dy);
    }

    /// Advance one tick and bounce off the top/bottom walls.
    ///
    /// Only the vertical velocity is flipped; the position is not pulled back
    /// inside the field, so the ball may overlap a wall for one tick.
    /// Returns true when a wall bounce happened.
    pub fn advance(&mut self, map: &GameMap) -> bool {
        self.rect.translate(self.vel);

        if self.rect.top() <= 0.0 || self.rect.bottom() >= map.height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }
}
