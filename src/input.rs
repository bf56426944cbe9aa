//! Keyboard input mapping
//!
//! Key signals only flip intent flags; the next tick reads them. Nothing
//! here touches the ball or the blocks.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Enter,
    Escape,
    Other,
}

/// One-shot commands produced by key releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a new session (only offered once the game is over)
    Restart,
    /// Leave the game, whatever its state
    Quit,
}

/// Tracks held direction keys
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    intents: TickInput,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.intents.move_left = true,
            Key::Right => self.intents.move_right = true,
            _ => {}
        }
    }

    /// Release a key. Enter restarts only when `game_over`; Escape always quits.
    pub fn key_up(&mut self, key: Key, game_over: bool) -> Option<Command> {
        match key {
            Key::Left => self.intents.move_left = false,
            Key::Right => self.intents.move_right = false,
            Key::Enter if game_over => return Some(Command::Restart),
            Key::Escape => return Some(Command::Quit),
            _ => {}
        }
        None
    }

    /// Intents for the next tick
    pub fn intents(&self) -> &TickInput {
        &self.intents
    }
}

/// Demo player: keep the paddle under the ball.
///
/// Holds still while the centres are within half a paddle step of each other
/// so the paddle doesn't jitter around the ball.
pub fn autopilot(state: &GameState) -> TickInput {
    let ball_x = state.ball.rect.center_x();
    let paddle_x = state.paddle.rect.center_x();
    let dead_zone = state.paddle.speed / 2;

    TickInput {
        move_left: ball_x < paddle_x - dead_zone,
        move_right: ball_x > paddle_x + dead_zone,
    }
}
