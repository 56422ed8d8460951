use log::{debug, warn};
use quartz_nbt::{NbtCompound, NbtTag};

use crate::block::PositionedBlock;
use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::formats::{checked_size, get_compound, get_int, get_list};
use crate::palette::Palette;
use crate::utils::calculate_bits_per_block;

/// Decodes the litematic container. Only the first region present is
/// decoded; any further regions are skipped. The palette is a list of
/// state compounds (names only, no property synthesis), block states
/// are bit-packed into a long array, and no cell is skipped regardless
/// of its value.
pub fn from_litematic(root: &NbtCompound, name: &str) -> Result<Blueprint, BlueprintError> {
    let regions = get_compound(root, "Regions")?;
    let (region_name, region_tag) = regions.inner().iter().next().ok_or_else(|| {
        BlueprintError::MalformedTagTree("Regions compound holds no regions".to_string())
    })?;
    if regions.inner().len() > 1 {
        warn!(
            "'{}' holds {} regions, decoding only '{}'",
            name,
            regions.inner().len(),
            region_name
        );
    }
    let region = match region_tag {
        NbtTag::Compound(region) => region,
        other => {
            return Err(BlueprintError::MalformedTagTree(format!(
                "region '{}' is not a compound: {:?}",
                region_name, other
            )))
        }
    };

    let size_tag = get_compound(region, "Size")?;
    let size = checked_size(
        get_int(size_tag, "x")?,
        get_int(size_tag, "y")?,
        get_int(size_tag, "z")?,
    )?;

    let palette = Palette::from_state_list(get_list(region, "BlockStatePalette")?)?;
    let packed = region.get::<_, &[i64]>("BlockStates").map_err(|e| {
        BlueprintError::MalformedTagTree(format!("long array 'BlockStates': {}", e))
    })?;
    let states = unpack_block_states(packed, palette.len(), size.volume())?;

    let mut blueprint = Blueprint::new(name, size);
    for (index, &palette_index) in states.iter().enumerate() {
        let block_type = palette.resolve(palette_index as i32)?.to_string();
        let (x, y, z) = size.coords_of(index);
        blueprint.push_block(PositionedBlock::new(x, y, z, block_type, 0))?;
    }

    debug!(
        "litematic decode of '{}': region '{}', {} cells in {:?}",
        name,
        region_name,
        blueprint.block_count(),
        size
    );
    blueprint.recalculate_materials();
    Ok(blueprint)
}

/// Unpacks the per-cell palette indices from the packed long array.
/// Entries never straddle a long; the tail bits of each long are
/// padding.
fn unpack_block_states(
    packed: &[i64],
    palette_size: usize,
    volume: usize,
) -> Result<Vec<usize>, BlueprintError> {
    let bits_per_block = calculate_bits_per_block(palette_size);
    let blocks_per_long = 64 / bits_per_block;
    let mask = (1i64 << bits_per_block) - 1;

    let mut decoded = Vec::with_capacity(volume);
    for &long in packed {
        for slot in 0..blocks_per_long {
            if decoded.len() >= volume {
                break;
            }
            let palette_index = ((long >> (slot * bits_per_block)) & mask) as usize;
            decoded.push(palette_index);
        }
    }

    if decoded.len() != volume {
        return Err(BlueprintError::MalformedTagTree(format!(
            "unpacked {} block states but the declared size needs {}",
            decoded.len(),
            volume
        )));
    }
    Ok(decoded)
}

/// Inverse of `unpack_block_states`; kept for fixtures and round-trip
/// tests of the codec.
pub(crate) fn pack_block_states(indices: &[usize], palette_size: usize) -> Vec<i64> {
    let bits_per_block = calculate_bits_per_block(palette_size);
    let blocks_per_long = 64 / bits_per_block;
    let mask = (1i64 << bits_per_block) - 1;

    let mut packed = Vec::new();
    for chunk in indices.chunks(blocks_per_long) {
        let mut long = 0i64;
        for (slot, &index) in chunk.iter().enumerate() {
            long |= (index as i64 & mask) << (slot * bits_per_block);
        }
        packed.push(long);
    }
    packed
}
