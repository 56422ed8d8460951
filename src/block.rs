use serde::{Deserialize, Serialize};

/// One placed unit of a blueprint, local to the structure's minimum
/// corner. `raw_state` carries the source format's orientation/variant
/// encoding verbatim; it only acquires meaning through the orientation
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionedBlock {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(rename = "rawState", default)]
    pub raw_state: u32,
}

impl PositionedBlock {
    pub fn new(x: i32, y: i32, z: i32, block_type: impl Into<String>, raw_state: u32) -> Self {
        PositionedBlock {
            x,
            y,
            z,
            block_type: block_type.into(),
            raw_state,
        }
    }
}

/// Normalizes a source type name into the canonical identifier:
/// property suffix and namespace prefix stripped, lowercased.
/// `minecraft:oak_log[axis=y]` becomes `oak_log`.
pub fn normalize_type_name(raw: &str) -> String {
    let without_props = match raw.find('[') {
        Some(bracket) => &raw[..bracket],
        None => raw,
    };
    let without_namespace = without_props
        .rsplit(':')
        .next()
        .unwrap_or(without_props);
    without_namespace.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_namespace() {
        assert_eq!(normalize_type_name("minecraft:oak_door"), "oak_door");
        assert_eq!(normalize_type_name("stone"), "stone");
    }

    #[test]
    fn test_normalize_strips_property_suffix() {
        assert_eq!(normalize_type_name("minecraft:oak_log[axis=y]"), "oak_log");
        assert_eq!(
            normalize_type_name("mod:weird_block[facing=north,half=top]"),
            "weird_block"
        );
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_type_name("Minecraft:Stone"), "stone");
    }
}
