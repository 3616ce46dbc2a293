use std::fmt;

use serde::Deserialize;

use crate::Params;

/// Game configuration
///
/// Every field defaults to its [`Params`] constant, so a partial table only
/// overrides the keys it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry the tick function cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.ball_size >= self.field_width || self.ball_size >= self.field_height {
            return Err(ConfigError::DoesNotFit {
                what: "ball",
                size: self.ball_size,
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::DoesNotFit {
                what: "paddle",
                size: self.paddle_height,
            });
        }
        // Both paddles must sit fully inside the field without overlapping
        if self.paddle_inset < 0.0 || 2.0 * (self.paddle_inset + self.paddle_width) > self.field_width
        {
            return Err(ConfigError::DoesNotFit {
                what: "paddle inset",
                size: self.paddle_inset,
            });
        }
        Ok(())
    }
}

/// AI difficulty level
///
/// Always within `AI_DIFFICULTY_MIN..=AI_DIFFICULTY_MAX`. Lower levels aim
/// worse and move slower; the top level tracks the ball perfectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "i32")]
pub struct Difficulty(i32);

impl Difficulty {
    /// Clamp `level` into the supported range
    pub fn new(level: i32) -> Self {
        let clamped = level.clamp(Params::AI_DIFFICULTY_MIN, Params::AI_DIFFICULTY_MAX);
        if clamped != level {
            log::warn!("AI difficulty {level} out of range, using {clamped}");
        }
        Self(clamped)
    }

    pub fn level(self) -> i32 {
        self.0
    }

    /// Maximum aim error in field units
    pub fn prediction_error(self) -> i32 {
        (Params::AI_DIFFICULTY_MAX - self.0) * Params::AI_ERROR_PER_LEVEL
    }

    /// Paddle speed multiplier (level / 2)
    pub fn speed_factor(self) -> f32 {
        self.0 as f32 / 2.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Params::AI_DIFFICULTY_DEFAULT)
    }
}

impl From<i32> for Difficulty {
    fn from(level: i32) -> Self {
        Self::new(level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size or speed that must be strictly positive was not
    NotPositive { name: &'static str, value: f32 },
    /// An entity does not fit inside the field
    DoesNotFit { what: &'static str, size: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { name, value } => {
                write!(f, "'{name}' must be positive, got {value}")
            }
            ConfigError::DoesNotFit { what, size } => {
                write!(f, "{what} ({size}) does not fit inside the field")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
