//! Game settings
//!
//! Everything the simulation needs to know about the playfield, the paddle,
//! the ball and the block layout. Loaded from JSON; any field left out falls
//! back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Wall positions and the lose line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    /// Left wall for the ball, left limit for the paddle
    pub left: i32,
    /// Top wall for the ball
    pub top: i32,
    /// Ball x beyond this bounces back
    pub ball_right_wall: i32,
    /// Paddle x at or beyond this stops moving right
    pub paddle_right_limit: i32,
    /// Ball y beyond this ends the run
    pub lose_threshold_y: i32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            left: PLAYFIELD_LEFT,
            top: PLAYFIELD_TOP,
            ball_right_wall: BALL_RIGHT_WALL,
            paddle_right_limit: PADDLE_RIGHT_LIMIT,
            lose_threshold_y: LOSE_THRESHOLD_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub start_x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Pixels per tick while a direction key is held
    pub speed: i32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            start_x: PADDLE_START_X,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub start_x: i32,
    pub start_y: i32,
    pub size: i32,
    pub start_vel_x: i32,
    pub start_vel_y: i32,
    /// Paddle bounce draws each axis speed from `bounce_speed_min..bounce_speed_max`
    pub bounce_speed_min: i32,
    pub bounce_speed_max: i32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            start_x: BALL_START_X,
            start_y: BALL_START_Y,
            size: BALL_SIZE,
            start_vel_x: BALL_START_VEL_X,
            start_vel_y: BALL_START_VEL_Y,
            bounce_speed_min: BOUNCE_SPEED_MIN,
            bounce_speed_max: BOUNCE_SPEED_MAX,
        }
    }
}

/// Parameters for the initial block grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSpec {
    pub count: u32,
    pub columns_per_row: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub block_width: i32,
    pub block_height: i32,
    pub row_spacing: i32,
    pub col_spacing: i32,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            count: BLOCK_COUNT,
            columns_per_row: BLOCKS_PER_ROW,
            start_x: BLOCK_START_X,
            start_y: BLOCK_START_Y,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            row_spacing: BLOCK_ROW_SPACING,
            col_spacing: BLOCK_COL_SPACING,
        }
    }
}

impl LayoutSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyLayout);
        }
        if self.columns_per_row == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.block_width <= 0 || self.block_height <= 0 {
            return Err(ConfigError::NonPositiveBlockSize {
                width: self.block_width,
                height: self.block_height,
            });
        }
        Ok(())
    }
}

/// End-of-game texts shown after the score. Defaults are the game's
/// original Swedish texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub win: String,
    pub lose: String,
    pub restart_hint: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            win: "Haj Haj Haj, du van Tony Rickardsson:s Breakout spel!!".to_string(),
            lose: "Naj Naj Naj, du förlora Tony Rickardsson:s Breakout Spel!!!".to_string(),
            restart_hint: "Klicka \"Enter\" för att köra igen\nKlicka \"Escape\" för att avsluta"
                .to_string(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield: Playfield,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub layout: LayoutSpec,
    pub messages: Messages,
    /// Fixed RNG seed; hosts pick one when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;

        if self.paddle.width <= 0 || self.paddle.height <= 0 {
            return Err(ConfigError::NonPositiveSize {
                what: "paddle",
                width: self.paddle.width,
                height: self.paddle.height,
            });
        }
        if self.paddle.speed < 0 {
            return Err(ConfigError::NegativePaddleSpeed(self.paddle.speed));
        }
        let max_paddle_speed = self
            .playfield
            .paddle_right_limit
            .saturating_sub(self.playfield.left)
            .max(0);
        if self.paddle.speed > max_paddle_speed {
            return Err(ConfigError::PaddleSpeedTooHigh {
                speed: self.paddle.speed,
                max: max_paddle_speed,
            });
        }
        if self.ball.size <= 0 {
            return Err(ConfigError::NonPositiveSize {
                what: "ball",
                width: self.ball.size,
                height: self.ball.size,
            });
        }

        let (min, max) = (self.ball.bounce_speed_min, self.ball.bounce_speed_max);
        if min <= 0 || min >= max {
            return Err(ConfigError::InvalidBounceRange { min, max });
        }

        // Start speeds obey the same cap as paddle bounces
        let (x, y) = (self.ball.start_vel_x, self.ball.start_vel_y);
        let allowed = -(max - 1)..max;
        if !allowed.contains(&x) || !allowed.contains(&y) {
            return Err(ConfigError::StartVelocityOutOfRange { x, y, limit: max });
        }
        if x == 0 && y == 0 {
            return Err(ConfigError::ZeroStartVelocity);
        }

        Ok(())
    }
}
