//! Collision detection and response
//!
//! Everything here is axis-aligned: walls flip one velocity component, the
//! paddle re-rolls both, blocks flip the vertical one.

use std::ops::Range;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Entity;
use super::state::Block;
use crate::settings::Playfield;

/// Which walls the ball bounced off this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallBounce {
    pub side: bool,
    pub top: bool,
}

/// Flip velocity components for a ball past the side or top walls.
///
/// There is no bottom wall: falling out is checked separately.
pub fn bounce_off_walls(ball: &Entity, vel: &mut IVec2, field: &Playfield) -> WallBounce {
    let mut bounce = WallBounce::default();

    if ball.x < field.left || ball.x > field.ball_right_wall {
        vel.x = -vel.x;
        bounce.side = true;
    }
    if ball.y < field.top {
        vel.y = -vel.y;
        bounce.top = true;
    }

    bounce
}

/// Send the ball back up with fresh random speeds.
///
/// The vertical speed is always upward. The horizontal speed keeps its
/// direction, with zero counting as rightward.
pub fn paddle_bounce(vel: &mut IVec2, rng: &mut impl Rng, speed: Range<i32>) {
    vel.y = -rng.random_range(speed.clone());
    let speed_x = rng.random_range(speed);
    vel.x = if vel.x < 0 { -speed_x } else { speed_x };
}

/// Index of the first block (in layout order) the ball overlaps
pub fn first_block_hit(ball: &Entity, blocks: &[Block]) -> Option<usize> {
    blocks.iter().position(|block| ball.intersects(&block.rect))
}
