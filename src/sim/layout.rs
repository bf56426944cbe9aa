//! Initial block grid

use super::rect::Entity;
use super::state::{Block, BlockKind};
use crate::consts::REINFORCED_EVERY;
use crate::error::ConfigError;
use crate::settings::LayoutSpec;

/// Validate `spec` and lay out its blocks
pub fn generate_layout(spec: &LayoutSpec) -> Result<Vec<Block>, ConfigError> {
    spec.validate()?;
    Ok(place_blocks(spec))
}

/// Lay out `spec.count` blocks left to right, wrapping to a new row every
/// `columns_per_row` blocks. Block ids are the layout index.
///
/// The variant follows the global index, not the column, so reinforced
/// blocks drift across rows whenever `columns_per_row` is not a multiple of
/// [`REINFORCED_EVERY`].
pub(crate) fn place_blocks(spec: &LayoutSpec) -> Vec<Block> {
    let columns = spec.columns_per_row.max(1) as usize;
    let step_x = spec.block_width + spec.col_spacing;
    let step_y = spec.block_height + spec.row_spacing;

    let mut blocks = Vec::with_capacity(spec.count as usize);
    let mut left = spec.start_x;
    let mut top = spec.start_y;

    for i in 0..spec.count as usize {
        if i > 0 && i % columns == 0 {
            top += step_y;
            left = spec.start_x;
        }

        let kind = if i % REINFORCED_EVERY == 0 {
            BlockKind::Reinforced
        } else {
            BlockKind::Standard
        };
        let rect = Entity::new(left, top, spec.block_width, spec.block_height);
        blocks.push(Block::new(i as u32, kind, rect));

        left += step_x;
    }

    blocks
}
