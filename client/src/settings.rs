//! Runtime settings loaded from an optional TOML file.
//!
//! Missing keys fall back to the defaults, so a file only needs the values
//! it changes:
//!
//! ```toml
//! player_one = "Alice"
//! ai_difficulty = 3
//!
//! [game]
//! ball_speed = 9.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use game_core::{Config, Difficulty, Params};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field geometry and speeds
    pub game: Config,
    pub leaderboard_path: PathBuf,
    pub player_one: String,
    pub player_two: String,
    pub ai_name: String,
    pub ai_difficulty: Difficulty,
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: Config::default(),
            leaderboard_path: PathBuf::from("leaderboard.json"),
            player_one: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
            ai_name: "AI".to_string(),
            ai_difficulty: Difficulty::default(),
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        if self.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        Ok(())
    }
}
