use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::patrol::Rect;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Largest accepted screen side. Keeps every coordinate the patrol can reach
/// (screen plus one step past an edge) far from `i32` overflow.
pub const MAX_SCREEN_SIZE: i32 = 1 << 16;

/// Settings for the patrol demo. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Pixels moved per tick.
    pub speed: i32,
    /// `[min_x, min_y, max_x, max_y]`
    pub start: [i32; 4],
    /// Ticks per second. `0` ticks as fast as possible.
    pub tick_rate: u32,
    /// Number of times the patrol tree runs to completion before exiting.
    pub laps: u32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            speed: 5,
            start: [10, 10, 110, 60],
            tick_rate: 60,
            laps: 3,
        }
    }
}

impl PatrolConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<PatrolConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<PatrolConfig, ConfigError> {
        let config: PatrolConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn start_rect(&self) -> Rect {
        let [min_x, min_y, max_x, max_y] = self.start;
        Rect::new(min_x, min_y, max_x, max_y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SCREEN_SIZE).contains(&self.screen_width)
            || !(1..=MAX_SCREEN_SIZE).contains(&self.screen_height)
        {
            return Err(ConfigError::Invalid(format!(
                "screen must be between 1x1 and {MAX_SCREEN_SIZE}x{MAX_SCREEN_SIZE}, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }

        let max_speed = self.screen_width.min(self.screen_height);
        if !(1..=max_speed).contains(&self.speed) {
            return Err(ConfigError::Invalid(format!(
                "speed must be between 1 and {max_speed}, got {}",
                self.speed
            )));
        }

        let rect = self.start_rect();
        if rect.min_x < 0
            || rect.min_y < 0
            || rect.min_x >= rect.max_x
            || rect.min_y >= rect.max_y
            || rect.max_x > self.screen_width
            || rect.max_y > self.screen_height
        {
            return Err(ConfigError::Invalid(format!(
                "start rectangle {:?} doesn't fit on a {}x{} screen",
                self.start, self.screen_width, self.screen_height
            )));
        }

        Ok(())
    }
}
