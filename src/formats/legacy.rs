use log::debug;
use quartz_nbt::NbtCompound;

use crate::block::{normalize_type_name, PositionedBlock};
use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::formats::{check_cell_count, get_flat_array, read_dimensions};
use crate::legacy_ids::LegacyIdTable;
use crate::palette::Palette;

/// Decodes the legacy array dialect: explicit dimensions plus two
/// parallel flat arrays, a numeric block id and a metadata byte per
/// cell. Id `0` is air and never recorded. An embedded name palette
/// wins when it lists the id; anything it misses falls back to the
/// external legacy id table, and a miss in both is an error, never
/// air.
pub fn from_legacy(
    root: &NbtCompound,
    name: &str,
    id_table: &dyn LegacyIdTable,
) -> Result<Blueprint, BlueprintError> {
    let size = read_dimensions(root)?;
    let block_ids = get_flat_array(root, "Blocks")?;
    let data = get_flat_array(root, "Data")?;
    check_cell_count(block_ids.len(), size)?;
    if data.len() < block_ids.len() {
        return Err(BlueprintError::MalformedTagTree(format!(
            "Data array holds {} entries but Blocks holds {}",
            data.len(),
            block_ids.len()
        )));
    }

    let palette = match root.get::<_, &NbtCompound>("Palette") {
        Ok(compound) => Some(Palette::from_name_map(compound)?),
        Err(_) => None,
    };

    let mut blueprint = Blueprint::new(name, size);
    for (index, &id) in block_ids.iter().enumerate() {
        if id == 0 {
            continue;
        }
        let meta = data[index] as u32;
        let block_type = palette
            .as_ref()
            .and_then(|palette| palette.resolve(id).ok())
            .map(str::to_string)
            .or_else(|| {
                id_table
                    .resolve(id as u16, meta as u8)
                    .map(|raw| normalize_type_name(&raw))
            })
            .ok_or(BlueprintError::PaletteIndexOutOfRange { index: id })?;
        let (x, y, z) = size.coords_of(index);
        blueprint.push_block(PositionedBlock::new(x, y, z, block_type, meta))?;
    }

    debug!(
        "legacy decode of '{}': {} blocks in {:?}",
        name,
        blueprint.block_count(),
        size
    );
    blueprint.recalculate_materials();
    Ok(blueprint)
}
