use log::debug;
use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use crate::block::{normalize_type_name, PositionedBlock};
use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::formats::{checked_size, get_int, get_list};
use crate::palette::Palette;

/// Decodes the vanilla structure dialect. Size and positions are
/// explicit int triples; the palette is a list of state compounds and
/// blocks reference it by index, in any order. Absent cells are air;
/// an explicit air entry is dropped to keep the model free of air. A
/// `facing` property synthesizes the raw state code, everything else
/// leaves it at `0`.
pub fn from_structure(root: &NbtCompound, name: &str) -> Result<Blueprint, BlueprintError> {
    let (sx, sy, sz) = int_triple(get_list(root, "size")?, "size")?;
    let size = checked_size(sx, sy, sz)?;

    let palette_list = get_list(root, "palette")?;
    let mut palette = Palette::new();
    let mut raw_states = Vec::with_capacity(palette_list.len());
    for tag in palette_list.iter() {
        let state = as_compound(tag, "palette entry")?;
        let raw_name = state.get::<_, &str>("Name").map_err(|e| {
            BlueprintError::MalformedTagTree(format!("palette entry missing Name: {}", e))
        })?;
        palette.push(normalize_type_name(raw_name));
        raw_states.push(facing_code(state));
    }

    let mut blueprint = Blueprint::new(name, size);
    for tag in get_list(root, "blocks")?.iter() {
        let entry = as_compound(tag, "block entry")?;
        let (x, y, z) = int_triple(get_list(entry, "pos")?, "pos")?;
        let state_index = get_int(entry, "state")?;
        let block_type = palette.resolve(state_index)?;
        if block_type == "air" {
            continue;
        }
        blueprint.push_block(PositionedBlock::new(
            x,
            y,
            z,
            block_type.to_string(),
            raw_states[state_index as usize],
        ))?;
    }

    debug!(
        "structure decode of '{}': {} blocks in {:?}",
        name,
        blueprint.block_count(),
        size
    );
    blueprint.recalculate_materials();
    Ok(blueprint)
}

/// Fixed facing -> code table shared with the orientation resolver's
/// door rule: north=0, south=1, west=2, east=3. Anything else, or no
/// facing at all, stays 0.
fn facing_code(state: &NbtCompound) -> u32 {
    let props = match state.get::<_, &NbtCompound>("Properties") {
        Ok(props) => props,
        Err(_) => return 0,
    };
    match props.get::<_, &str>("facing") {
        Ok("north") => 0,
        Ok("south") => 1,
        Ok("west") => 2,
        Ok("east") => 3,
        _ => 0,
    }
}

fn as_compound<'a>(tag: &'a NbtTag, what: &str) -> Result<&'a NbtCompound, BlueprintError> {
    match tag {
        NbtTag::Compound(compound) => Ok(compound),
        other => Err(BlueprintError::MalformedTagTree(format!(
            "{} is not a compound: {:?}",
            what, other
        ))),
    }
}

fn int_triple(list: &NbtList, what: &str) -> Result<(i32, i32, i32), BlueprintError> {
    let mut values = [0i32; 3];
    if list.len() != 3 {
        return Err(BlueprintError::MalformedTagTree(format!(
            "{} list has {} elements, expected 3",
            what,
            list.len()
        )));
    }
    for (slot, tag) in values.iter_mut().zip(list.iter()) {
        *slot = match tag {
            NbtTag::Byte(v) => *v as i32,
            NbtTag::Short(v) => *v as i32,
            NbtTag::Int(v) => *v,
            other => {
                return Err(BlueprintError::MalformedTagTree(format!(
                    "{} element is not an integer: {:?}",
                    what, other
                )))
            }
        };
    }
    Ok((values[0], values[1], values[2]))
}
