//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed integer steps only
//! - Seeded RNG only
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallBounce, bounce_off_walls, first_block_hit, paddle_bounce};
pub use layout::generate_layout;
pub use rect::Entity;
pub use state::{Ball, Block, BlockKind, GamePhase, GameState, Outcome, Paddle, Rgb};
pub use tick::{TickInput, TickResult, tick};
