use glam::Vec2;

use crate::{Config, Params, Side};

/// Axis-aligned rectangle, top-left anchored, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.min.y + self.size.y * 0.5
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// Strict overlap test. Rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move the rectangle so it lies inside `bounds`. Size is never changed;
    /// a rectangle larger than the bounds on an axis is centred on that axis.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.min.x = clamp_axis(self.min.x, self.size.x, bounds.min.x, bounds.size.x);
        self.min.y = clamp_axis(self.min.y, self.size.y, bounds.min.y, bounds.size.y);
    }
}

fn clamp_axis(pos: f32, len: f32, bounds_pos: f32, bounds_len: f32) -> f32 {
    if len >= bounds_len {
        bounds_pos + (bounds_len - len) / 2.0
    } else if pos < bounds_pos {
        bounds_pos
    } else if pos + len > bounds_pos + bounds_len {
        bounds_pos + bounds_len - len
    } else {
        pos
    }
}

/// Play-field geometry
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball rectangle centred exactly on the field
    pub fn ball_spawn(&self, ball_size: f32) -> Rect {
        Rect::from_center_size(self.center(), Vec2::splat(ball_size))
    }

    /// Paddle rectangle at its starting position: inset from its side wall,
    /// vertically centred
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Rect {
        let x = match side {
            Side::Left => config.paddle_inset,
            Side::Right => self.width - config.paddle_inset - config.paddle_width,
        };
        let y = (self.height - config.paddle_height) / 2.0;
        Rect::new(x, y, config.paddle_width, config.paddle_height)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}
