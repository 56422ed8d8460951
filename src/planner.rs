use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::block::PositionedBlock;
use crate::blueprint::Blueprint;
use crate::orientation::{resolve_face, Face};

/// All blocks sharing one vertical coordinate, the unit of build
/// sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub y: i32,
    pub blocks: Vec<PositionedBlock>,
}

/// Groups blocks into layers ordered bottom-up. Within a layer the
/// input order is preserved as the deterministic tie-break; no
/// secondary sort key is applied. Executors must finish a layer
/// before starting the one above it: blocks can require the layer
/// below as support.
pub fn plan(blocks: &[PositionedBlock]) -> Vec<Layer> {
    let mut layers: BTreeMap<i32, Vec<PositionedBlock>> = BTreeMap::new();
    for block in blocks {
        layers.entry(block.y).or_default().push(block.clone());
    }
    layers
        .into_iter()
        .map(|(y, blocks)| Layer { y, blocks })
        .collect()
}

/// One argument set for the external `place` capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementStep {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(rename = "type")]
    pub block_type: String,
    pub face: Face,
}

/// Flattens the planned layers into the sequence a build executor
/// walks, resolving each block's placement face. Blocks whose raw
/// state falls outside their orientation rule's contract (torches from
/// formats that do not encode orientation) keep the default face.
pub fn placement_sequence(blueprint: &Blueprint) -> Vec<PlacementStep> {
    let mut steps = Vec::with_capacity(blueprint.blocks.len());
    for layer in plan(&blueprint.blocks) {
        for block in layer.blocks {
            let face = match resolve_face(&block.block_type, block.raw_state) {
                Ok(face) => face,
                Err(_) => {
                    warn!(
                        "no orientation for {} with state {}, defaulting to bottom",
                        block.block_type, block.raw_state
                    );
                    Face::Bottom
                }
            };
            steps.push(PlacementStep {
                x: block.x,
                y: block.y,
                z: block.z,
                block_type: block.block_type,
                face,
            });
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Size;

    fn block_at(y: i32, tag: &str) -> PositionedBlock {
        PositionedBlock::new(0, y, 0, tag, 0)
    }

    #[test]
    fn test_layers_are_ordered_bottom_up() {
        let blocks = vec![
            block_at(2, "a"),
            block_at(0, "b"),
            block_at(1, "c"),
            block_at(0, "d"),
        ];

        let layers = plan(&blocks);
        let ys: Vec<i32> = layers.iter().map(|layer| layer.y).collect();
        assert_eq!(ys, vec![0, 1, 2]);
    }

    #[test]
    fn test_layer_preserves_input_order() {
        let blocks = vec![
            block_at(2, "a"),
            block_at(0, "b"),
            block_at(1, "c"),
            block_at(0, "d"),
        ];

        let layers = plan(&blocks);
        let ground: Vec<&str> = layers[0]
            .blocks
            .iter()
            .map(|block| block.block_type.as_str())
            .collect();
        assert_eq!(ground, vec!["b", "d"]);
    }

    #[test]
    fn test_plan_of_empty_input_is_empty() {
        assert!(plan(&[]).is_empty());
    }

    #[test]
    fn test_placement_sequence_walks_layers_and_resolves_faces() {
        let mut blueprint = Blueprint::new("test", Size::new(2, 3, 1));
        blueprint
            .push_block(PositionedBlock::new(0, 2, 0, "oak_door", 2))
            .unwrap();
        blueprint
            .push_block(PositionedBlock::new(0, 0, 0, "stone", 0))
            .unwrap();
        blueprint
            .push_block(PositionedBlock::new(1, 0, 0, "oak_stairs", 1))
            .unwrap();
        blueprint.recalculate_materials();

        let steps = placement_sequence(&blueprint);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].block_type, "stone");
        assert_eq!(steps[0].face, Face::Bottom);
        assert_eq!(steps[1].block_type, "oak_stairs");
        assert_eq!(steps[1].face, Face::West);
        assert_eq!(steps[2].block_type, "oak_door");
        assert_eq!(steps[2].face, Face::West);
    }

    #[test]
    fn test_placement_sequence_defaults_unoriented_torches() {
        let mut blueprint = Blueprint::new("test", Size::new(1, 1, 1));
        blueprint
            .push_block(PositionedBlock::new(0, 0, 0, "torch", 0))
            .unwrap();
        blueprint.recalculate_materials();

        let steps = placement_sequence(&blueprint);
        assert_eq!(steps[0].face, Face::Bottom);
    }
}
