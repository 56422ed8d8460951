use log::debug;
use quartz_nbt::NbtCompound;

use crate::block::PositionedBlock;
use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::formats::{check_cell_count, get_compound, get_flat_array, read_dimensions};
use crate::palette::Palette;

/// Decodes the modern palette dialect: a name -> index palette and a
/// single flat array of palette indices. Index `0` is air and skipped.
/// The format carries no per-block orientation, so every block leaves
/// with a raw state of `0` and orientation defaults apply downstream.
pub fn from_modern(root: &NbtCompound, name: &str) -> Result<Blueprint, BlueprintError> {
    let size = read_dimensions(root)?;
    let palette = Palette::from_name_map(get_compound(root, "Palette")?)?;
    let indices = get_flat_array(root, "Blocks")?;
    check_cell_count(indices.len(), size)?;

    let mut blueprint = Blueprint::new(name, size);
    for (index, &palette_index) in indices.iter().enumerate() {
        if palette_index == 0 {
            continue;
        }
        let block_type = palette.resolve(palette_index)?.to_string();
        let (x, y, z) = size.coords_of(index);
        blueprint.push_block(PositionedBlock::new(x, y, z, block_type, 0))?;
    }

    debug!(
        "modern decode of '{}': {} blocks in {:?}, palette of {}",
        name,
        blueprint.block_count(),
        size,
        palette.len()
    );
    blueprint.recalculate_materials();
    Ok(blueprint)
}
