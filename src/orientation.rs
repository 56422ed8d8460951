use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BlueprintError;

/// Placement face handed to the external block-placing capability.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    North,
    South,
    East,
    West,
    Top,
    Bottom,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::North => "north",
            Face::South => "south",
            Face::East => "east",
            Face::West => "west",
            Face::Top => "top",
            Face::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

const DOOR_FACES: [Face; 4] = [Face::North, Face::South, Face::West, Face::East];
const TORCH_FACES: [Face; 5] = [Face::East, Face::West, Face::South, Face::North, Face::Top];
const STAIR_FACES: [Face; 4] = [Face::East, Face::West, Face::South, Face::North];

/// Maps a block type plus its raw state code to a placement face.
/// Categories are matched most specific first. Torch codes are only
/// defined for 1..=5; anything else is rejected.
pub fn resolve_face(block_type: &str, raw_state: u32) -> Result<Face, BlueprintError> {
    if block_type.contains("door") {
        return Ok(DOOR_FACES[(raw_state & 0b11) as usize]);
    }
    if block_type.contains("torch") {
        if raw_state == 5 {
            return Ok(Face::Bottom);
        }
        if (1..=4).contains(&raw_state) {
            return Ok(TORCH_FACES[(raw_state - 1) as usize]);
        }
        return Err(BlueprintError::InvalidOrientationCode {
            block_type: block_type.to_string(),
            code: raw_state,
        });
    }
    if block_type.contains("stairs") {
        return Ok(STAIR_FACES[(raw_state & 0b11) as usize]);
    }
    Ok(Face::Bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_faces() {
        assert_eq!(resolve_face("oak_door", 0).unwrap(), Face::North);
        assert_eq!(resolve_face("oak_door", 1).unwrap(), Face::South);
        assert_eq!(resolve_face("oak_door", 2).unwrap(), Face::West);
        assert_eq!(resolve_face("oak_door", 3).unwrap(), Face::East);
        // Only the low two bits carry the facing.
        assert_eq!(resolve_face("iron_door", 6).unwrap(), Face::West);
    }

    #[test]
    fn test_torch_faces() {
        assert_eq!(resolve_face("torch", 1).unwrap(), Face::East);
        assert_eq!(resolve_face("torch", 2).unwrap(), Face::West);
        assert_eq!(resolve_face("torch", 3).unwrap(), Face::South);
        assert_eq!(resolve_face("torch", 4).unwrap(), Face::North);
        assert_eq!(resolve_face("redstone_torch", 5).unwrap(), Face::Bottom);
    }

    #[test]
    fn test_torch_code_out_of_contract() {
        assert!(matches!(
            resolve_face("torch", 0),
            Err(BlueprintError::InvalidOrientationCode { code: 0, .. })
        ));
        assert!(matches!(
            resolve_face("wall_torch", 6),
            Err(BlueprintError::InvalidOrientationCode { code: 6, .. })
        ));
    }

    #[test]
    fn test_stair_faces() {
        assert_eq!(resolve_face("oak_stairs", 0).unwrap(), Face::East);
        assert_eq!(resolve_face("oak_stairs", 1).unwrap(), Face::West);
        assert_eq!(resolve_face("stone_brick_stairs", 2).unwrap(), Face::South);
        assert_eq!(resolve_face("oak_stairs", 3).unwrap(), Face::North);
    }

    #[test]
    fn test_default_is_bottom() {
        assert_eq!(resolve_face("stone", 0).unwrap(), Face::Bottom);
        assert_eq!(resolve_face("stone", 13).unwrap(), Face::Bottom);
        assert_eq!(resolve_face("glass", 5).unwrap(), Face::Bottom);
    }

    #[test]
    fn test_face_display_is_lowercase() {
        assert_eq!(Face::North.to_string(), "north");
        assert_eq!(Face::Bottom.to_string(), "bottom");
    }
}
