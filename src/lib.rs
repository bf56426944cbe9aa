//! Breakout - a paddle, a ball, and a wall of blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Data-driven playfield, layout and message configuration
//! - `input`: Key signals to movement intents and commands
//! - `game`: Host-facing facade (tick, key events, render snapshots)
//!
//! Windowing and drawing are the host's job; this crate only exposes
//! read-only snapshots of what should be on screen.

pub mod error;
pub mod game;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::{Game, Snapshot};
pub use input::{Command, InputMapper, Key};
pub use settings::Settings;

/// Game configuration constants
///
/// These are the defaults for [`Settings`]; the simulation itself reads
/// everything through the settings so a host can resize the playfield.
pub mod consts {
    /// Playfield walls
    pub const PLAYFIELD_LEFT: i32 = 0;
    pub const PLAYFIELD_TOP: i32 = 0;
    pub const BALL_RIGHT_WALL: i32 = 755;
    /// Paddle stops advancing right once its left edge reaches this
    pub const PADDLE_RIGHT_LIMIT: i32 = 700;
    /// Ball top edge below this line loses the game
    pub const LOSE_THRESHOLD_Y: i32 = 580;

    /// Paddle defaults
    pub const PADDLE_START_X: i32 = 347;
    pub const PADDLE_Y: i32 = 520;
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    pub const PADDLE_SPEED: i32 = 12;

    /// Ball defaults
    pub const BALL_START_X: i32 = 376;
    pub const BALL_START_Y: i32 = 328;
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_START_VEL_X: i32 = 5;
    pub const BALL_START_VEL_Y: i32 = 5;
    /// Paddle bounce speed range per axis (max exclusive)
    pub const BOUNCE_SPEED_MIN: i32 = 5;
    pub const BOUNCE_SPEED_MAX: i32 = 12;

    /// Block layout defaults
    pub const BLOCK_COUNT: u32 = 15;
    pub const BLOCKS_PER_ROW: u32 = 5;
    pub const BLOCK_START_X: i32 = 100;
    pub const BLOCK_START_Y: i32 = 50;
    pub const BLOCK_WIDTH: i32 = 100;
    pub const BLOCK_HEIGHT: i32 = 32;
    pub const BLOCK_ROW_SPACING: i32 = 18;
    pub const BLOCK_COL_SPACING: i32 = 30;
    /// Every Nth block (by global index) is reinforced
    pub const REINFORCED_EVERY: usize = 3;
}
