//! Game state and core simulation types
//!
//! A [`GameState`] is one session: it owns the ball, the paddle and the
//! active blocks, and is rebuilt in place on restart.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::place_blocks;
use super::rect::Entity;
use super::tick::TickInput;
use crate::error::ConfigError;
use crate::settings::{BallSettings, PaddleSettings, Settings};

/// How a tick left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Continue,
    Win,
    Lose,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    /// The outcome that put the session in this phase
    pub fn outcome(self) -> Outcome {
        match self {
            GamePhase::Playing => Outcome::Continue,
            GamePhase::Won => Outcome::Win,
            GamePhase::Lost => Outcome::Lose,
        }
    }
}

/// Display colour. Cosmetic only, never read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    /// Breaks on the first hit
    #[default]
    Standard,
    /// Takes two hits
    Reinforced,
}

impl BlockKind {
    pub fn initial_hits(self) -> u8 {
        match self {
            BlockKind::Standard => 1,
            BlockKind::Reinforced => 2,
        }
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub kind: BlockKind,
    pub rect: Entity,
    pub hits_remaining: u8,
    pub color: Rgb,
}

impl Block {
    pub fn new(id: u32, kind: BlockKind, rect: Entity) -> Self {
        Self {
            id,
            kind,
            rect,
            hits_remaining: kind.initial_hits(),
            color: Rgb::WHITE,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Register one ball hit. Returns true only on the hit that destroys the block.
    pub fn apply_hit(&mut self) -> bool {
        if self.is_destroyed() {
            return false;
        }
        match self.kind {
            BlockKind::Standard => self.hits_remaining = 0,
            BlockKind::Reinforced => self.hits_remaining -= 1,
        }
        self.is_destroyed()
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Entity,
    /// Pixels per tick
    pub vel: IVec2,
}

impl Ball {
    pub fn from_settings(ball: &BallSettings) -> Self {
        Self {
            rect: Entity::new(ball.start_x, ball.start_y, ball.size, ball.size),
            vel: IVec2::new(ball.start_vel_x, ball.start_vel_y),
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.rect.translate(self.vel.x, self.vel.y);
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Entity,
    pub speed: i32,
}

impl Paddle {
    pub fn from_settings(paddle: &PaddleSettings) -> Self {
        Self {
            rect: Entity::new(paddle.start_x, paddle.y, paddle.width, paddle.height),
            speed: paddle.speed,
        }
    }

    /// Apply held direction keys. Each direction is checked against its own
    /// bound before moving, so the paddle can overshoot a bound by up to one
    /// step, and holding both keys cancels out.
    pub fn steer(&mut self, input: &TickInput, left_limit: i32, right_limit: i32) {
        if input.move_left && self.rect.x > left_limit {
            self.rect.x -= self.speed;
        }
        if input.move_right && self.rect.x < right_limit {
            self.rect.x += self.speed;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub settings: Settings,
    pub score: u32,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Active blocks in layout order. Destroyed blocks are removed.
    pub blocks: Vec<Block>,
    /// Score needed to win, taken from the generated layout
    pub total_blocks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh session from validated settings
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::from_settings(&settings.ball),
            paddle: Paddle::from_settings(&settings.paddle),
            settings,
            score: 0,
            phase: GamePhase::Playing,
            blocks: Vec::new(),
            total_blocks: 0,
            time_ticks: 0,
        };
        state.setup();

        log::info!(
            "New session (seed {}): {} blocks",
            seed,
            state.total_blocks
        );
        Ok(state)
    }

    /// Throw away the current run and start over with a full wall
    pub fn reset(&mut self) {
        self.setup();
        log::info!("Session reset: {} blocks", self.total_blocks);
    }

    /// Stop the run. `Outcome::Continue` leaves the session untouched.
    pub fn end_game(&mut self, outcome: Outcome) {
        self.phase = match outcome {
            Outcome::Continue => return,
            Outcome::Win => GamePhase::Won,
            Outcome::Lose => GamePhase::Lost,
        };
        log::info!("Game over ({:?}) with score {}", outcome, self.score);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    fn setup(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.ball = Ball::from_settings(&self.settings.ball);
        self.paddle = Paddle::from_settings(&self.settings.paddle);

        self.blocks = place_blocks(&self.settings.layout);
        for block in &mut self.blocks {
            block.color = Rgb::random(&mut self.rng);
        }
        self.total_blocks = self.blocks.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_standard_block_breaks_on_first_hit() {
        let mut block = Block::new(1, BlockKind::Standard, Entity::default());
        assert_eq!(block.hits_remaining, 1);
        assert!(block.apply_hit());
        assert!(block.is_destroyed());
        // Further hits never report a second destruction
        assert!(!block.apply_hit());
    }

    #[test]
    fn test_reinforced_block_needs_two_hits() {
        let mut block = Block::new(1, BlockKind::Reinforced, Entity::default());
        assert_eq!(block.hits_remaining, 2);
        assert!(!block.apply_hit());
        assert_eq!(block.hits_remaining, 1);
        assert!(!block.is_destroyed());
        assert!(block.apply_hit());
        assert!(block.is_destroyed());
    }

    #[test]
    fn test_new_session_starting_positions() {
        let state = GameState::new(Settings::default(), 1).unwrap();
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
        assert_eq!(state.ball.rect.x, BALL_START_X);
        assert_eq!(state.ball.rect.y, BALL_START_Y);
        assert_eq!(state.ball.vel, IVec2::new(5, 5));
        assert_eq!(state.paddle.rect.x, PADDLE_START_X);
        assert_eq!(state.paddle.speed, PADDLE_SPEED);
        assert_eq!(state.blocks.len(), 15);
        assert_eq!(state.total_blocks, 15);
    }

    #[test]
    fn test_new_session_rejects_bad_layout() {
        let mut settings = Settings::default();
        settings.layout.count = 0;
        assert_eq!(
            GameState::new(settings, 1).unwrap_err(),
            ConfigError::EmptyLayout
        );
    }

    #[test]
    fn test_block_colors_follow_seed() {
        let a = GameState::new(Settings::default(), 42).unwrap();
        let b = GameState::new(Settings::default(), 42).unwrap();
        let colors_a: Vec<_> = a.blocks.iter().map(|b| b.color).collect();
        let colors_b: Vec<_> = b.blocks.iter().map(|b| b.color).collect();
        assert_eq!(colors_a, colors_b);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.score = 9;
        state.blocks.truncate(4);
        state.ball.rect.translate(100, 200);
        state.ball.vel = IVec2::new(-8, -11);
        state.paddle.rect.x = 12;
        state.end_game(Outcome::Lose);
        assert!(state.is_game_over());

        state.reset();

        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
        assert_eq!(state.blocks.len(), 15);
        assert_eq!(state.ball, Ball::from_settings(&state.settings.ball));
        assert_eq!(state.paddle, Paddle::from_settings(&state.settings.paddle));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_end_game_with_continue_is_ignored() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.end_game(Outcome::Continue);
        assert_eq!(state.phase, GamePhase::Playing);
        state.end_game(Outcome::Win);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.phase.outcome(), Outcome::Win);
    }

    #[test]
    fn test_paddle_steer_bounds() {
        let mut paddle = Paddle {
            rect: Entity::new(5, 520, 100, 20),
            speed: 12,
        };
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        paddle.steer(&left, 0, 700);
        // Overshoots the left wall by one step
        assert_eq!(paddle.rect.x, -7);
        paddle.steer(&left, 0, 700);
        assert_eq!(paddle.rect.x, -7);

        paddle.rect.x = 695;
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        paddle.steer(&right, 0, 700);
        assert_eq!(paddle.rect.x, 707);
        paddle.steer(&right, 0, 700);
        assert_eq!(paddle.rect.x, 707);
    }

    #[test]
    fn test_paddle_steer_exact_limits() {
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        let mut paddle = Paddle {
            rect: Entity::new(0, 520, 100, 20),
            speed: 12,
        };

        // Sitting on a limit blocks that direction only
        paddle.steer(&left, 0, 700);
        assert_eq!(paddle.rect.x, 0);
        paddle.steer(&right, 0, 700);
        assert_eq!(paddle.rect.x, 12);

        paddle.rect.x = 700;
        paddle.steer(&right, 0, 700);
        assert_eq!(paddle.rect.x, 700);
        paddle.steer(&left, 0, 700);
        assert_eq!(paddle.rect.x, 688);

        // One pixel inside a limit still moves a full step
        paddle.rect.x = 1;
        paddle.steer(&left, 0, 700);
        assert_eq!(paddle.rect.x, -11);
        paddle.rect.x = 699;
        paddle.steer(&right, 0, 700);
        assert_eq!(paddle.rect.x, 711);
    }

    #[test]
    fn test_paddle_both_keys_cancel() {
        let mut paddle = Paddle {
            rect: Entity::new(347, 520, 100, 20),
            speed: 12,
        };
        let both = TickInput {
            move_left: true,
            move_right: true,
        };
        paddle.steer(&both, 0, 700);
        assert_eq!(paddle.rect.x, 347);
    }
}
