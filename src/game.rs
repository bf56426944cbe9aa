//! Host-facing game facade
//!
//! A host (window, terminal, test harness) drives the game through three
//! calls: [`Game::on_tick`] from its timer, and [`Game::on_key_down`] /
//! [`Game::on_key_up`] from its key events. Everything it needs to draw
//! comes back as a [`Snapshot`].

use serde::Serialize;

use crate::error::ConfigError;
use crate::input::{Command, InputMapper, Key};
use crate::settings::Settings;
use crate::sim::{Block, Entity, GameState, Outcome, TickResult, tick};

/// Read-only view of everything on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub ball: Entity,
    pub paddle: Entity,
    /// Active blocks in layout order
    pub blocks: Vec<Block>,
    pub score: u32,
    pub game_over: bool,
    /// Outcome of the latest tick
    pub outcome: Outcome,
    /// Blocks the host should remove since the previous tick
    pub blocks_destroyed: Vec<u32>,
    pub status: String,
}

/// A running game: one session plus its input state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    input: InputMapper,
    last_tick: TickResult,
    running: bool,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(settings, seed)?,
            input: InputMapper::new(),
            last_tick: TickResult::default(),
            running: true,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// False once the player has quit
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one step. The host should stop its timer once
    /// `snapshot.game_over` is set; extra ticks are ignored anyway.
    pub fn on_tick(&mut self) -> Snapshot {
        if self.running {
            self.last_tick = tick(&mut self.state, self.input.intents());
        }
        self.snapshot()
    }

    pub fn on_key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    /// Handle a key release. Restart is applied here; Quit is returned so the
    /// host can close down. A quit game ignores every further key.
    pub fn on_key_up(&mut self, key: Key) -> Option<Command> {
        if !self.running {
            return None;
        }
        let command = self.input.key_up(key, self.state.is_game_over());
        match command {
            Some(Command::Restart) => {
                self.state.reset();
                self.last_tick = TickResult::default();
            }
            Some(Command::Quit) => {
                log::info!("Quit requested");
                self.running = false;
            }
            None => {}
        }
        command
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.state.ball.rect,
            paddle: self.state.paddle.rect,
            blocks: self.state.blocks.clone(),
            score: self.state.score,
            game_over: self.state.is_game_over(),
            outcome: self.last_tick.outcome,
            blocks_destroyed: self.last_tick.blocks_destroyed.clone(),
            status: self.status_text(),
        }
    }

    /// `Score: n`, followed by the end message and restart hint once the game is over
    pub fn status_text(&self) -> String {
        let messages = &self.state.settings.messages;
        let score = self.state.score;
        match self.state.phase.outcome() {
            Outcome::Continue => format!("Score: {score}"),
            Outcome::Win => format!("Score: {score} \n{}\n{}", messages.win, messages.restart_hint),
            Outcome::Lose => format!("Score: {score} \n{}\n{}", messages.lose, messages.restart_hint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn game() -> Game {
        Game::new(Settings::default(), 11).unwrap()
    }

    #[test]
    fn test_tick_returns_updated_positions() {
        let mut game = game();
        let snapshot = game.on_tick();
        assert_eq!((snapshot.ball.x, snapshot.ball.y), (381, 333));
        assert_eq!(snapshot.blocks.len(), 15);
        assert_eq!(snapshot.status, "Score: 0");
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.outcome, Outcome::Continue);
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let mut game = game();
        game.on_key_down(Key::Right);
        game.on_tick();
        let snapshot = game.on_tick();
        assert_eq!(snapshot.paddle.x, 347 + 24);

        assert_eq!(game.on_key_up(Key::Right), None);
        let snapshot = game.on_tick();
        assert_eq!(snapshot.paddle.x, 347 + 24);
    }

    #[test]
    fn test_status_text_on_game_over() {
        let mut game = game();
        game.state.score = 4;
        game.state.end_game(Outcome::Lose);
        let messages = &game.state.settings.messages;
        assert_eq!(
            game.status_text(),
            format!("Score: 4 \n{}\n{}", messages.lose, messages.restart_hint)
        );

        game.state.phase = GamePhase::Won;
        assert!(game.status_text().contains(&game.state.settings.messages.win));
    }

    #[test]
    fn test_enter_ignored_while_playing() {
        let mut game = game();
        game.on_tick();
        assert_eq!(game.on_key_up(Key::Enter), None);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_restart_after_loss() {
        let mut game = game();
        // Drop the ball straight out of the playfield
        game.state.ball.rect.x = 50;
        game.state.ball.rect.y = 579;
        let snapshot = game.on_tick();
        assert!(snapshot.game_over);
        assert_eq!(snapshot.outcome, Outcome::Lose);

        // Further ticks change nothing
        let frozen = game.on_tick();
        assert_eq!(frozen.ball, snapshot.ball);

        assert_eq!(game.on_key_up(Key::Enter), Some(Command::Restart));
        let snapshot = game.snapshot();
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.blocks.len(), 15);
        assert_eq!((snapshot.ball.x, snapshot.ball.y), (376, 328));
        assert_eq!(snapshot.outcome, Outcome::Continue);
    }

    #[test]
    fn test_quit_stops_ticks() {
        let mut game = game();
        assert_eq!(game.on_key_up(Key::Escape), Some(Command::Quit));
        assert!(!game.is_running());

        let before = game.snapshot();
        let after = game.on_tick();
        assert_eq!(before, after);
    }

    #[test]
    fn test_quit_game_ignores_restart() {
        let mut game = game();
        game.state.score = 3;
        game.state.end_game(Outcome::Lose);
        assert_eq!(game.on_key_up(Key::Escape), Some(Command::Quit));

        assert_eq!(game.on_key_up(Key::Enter), None);
        assert!(game.state().is_game_over());
        assert_eq!(game.state().score, 3);
        assert_eq!(game.on_key_up(Key::Escape), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&game().snapshot()).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"Reinforced\""));
    }
}
