use log::debug;
use quartz_nbt::NbtCompound;

use crate::block::PositionedBlock;
use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::formats::{check_cell_count, get_compound, get_flat_array, read_dimensions};
use crate::palette::Palette;

/// Decodes the sponge container: the modern palette shape wrapped one
/// level deeper under a `Schematic` compound. Unlike the modern
/// decoder this one records every cell, air included; index `0` gets
/// no special treatment.
pub fn from_sponge(root: &NbtCompound, name: &str) -> Result<Blueprint, BlueprintError> {
    let container = get_compound(root, "Schematic")?;
    let size = read_dimensions(container)?;
    let palette = Palette::from_name_map(get_compound(container, "Palette")?)?;
    let indices = get_flat_array(container, "Blocks")?;
    check_cell_count(indices.len(), size)?;

    let mut blueprint = Blueprint::new(name, size);
    for (index, &palette_index) in indices.iter().enumerate() {
        let block_type = palette.resolve(palette_index)?.to_string();
        let (x, y, z) = size.coords_of(index);
        blueprint.push_block(PositionedBlock::new(x, y, z, block_type, 0))?;
    }

    debug!(
        "sponge decode of '{}': {} cells in {:?}, palette of {}",
        name,
        blueprint.block_count(),
        size,
        palette.len()
    );
    blueprint.recalculate_materials();
    Ok(blueprint)
}
