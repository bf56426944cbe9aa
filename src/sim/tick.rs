//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one step. There is no time delta:
//! the host's timer decides how often ticks happen.

use serde::{Deserialize, Serialize};

use super::collision::{WallBounce, bounce_off_walls, first_block_hit, paddle_bounce};
use super::state::{GameState, Outcome};

/// Held direction keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResult {
    pub score_delta: u32,
    /// Ids of blocks removed this tick
    pub blocks_destroyed: Vec<u32>,
    pub walls: WallBounce,
    pub paddle_hit: bool,
    pub outcome: Outcome,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput) -> TickResult {
    if state.is_game_over() {
        return TickResult {
            outcome: state.phase.outcome(),
            ..Default::default()
        };
    }

    state.time_ticks += 1;
    let mut result = TickResult::default();
    let field = state.settings.playfield;

    state.paddle.steer(input, field.left, field.paddle_right_limit);

    state.ball.advance();
    result.walls = bounce_off_walls(&state.ball.rect, &mut state.ball.vel, &field);

    if state.ball.rect.intersects(&state.paddle.rect) {
        let speeds = &state.settings.ball;
        paddle_bounce(
            &mut state.ball.vel,
            &mut state.rng,
            speeds.bounce_speed_min..speeds.bounce_speed_max,
        );
        result.paddle_hit = true;
        log::debug!("Paddle bounce, ball velocity now {}", state.ball.vel);
    }

    // Find the hit against the current block list first, then mutate it
    if let Some(index) = first_block_hit(&state.ball.rect, &state.blocks) {
        state.ball.vel.y = -state.ball.vel.y;

        if state.blocks[index].apply_hit() {
            let block = state.blocks.remove(index);
            state.score += 1;
            result.score_delta += 1;
            result.blocks_destroyed.push(block.id);
            log::debug!(
                "Block {} ({:?}) destroyed, score {}",
                block.id,
                block.kind,
                state.score
            );
        }
    }

    result.outcome = check_outcome(state);
    state.end_game(result.outcome);

    log::trace!(
        "tick {}: ball {:?} vel {} paddle x {}",
        state.time_ticks,
        state.ball.rect,
        state.ball.vel,
        state.paddle.rect.x
    );

    result
}

/// Win is checked before lose, so clearing the last block on the same tick
/// the ball drops out still counts as a win.
fn check_outcome(state: &GameState) -> Outcome {
    if state.score == state.total_blocks {
        Outcome::Win
    } else if state.ball.rect.y > state.settings.playfield.lose_threshold_y {
        Outcome::Lose
    } else {
        Outcome::Continue
    }
}
