use std::collections::HashMap;

use crate::block::PositionedBlock;
use crate::error::BlueprintError;
use crate::metadata::BlueprintMetadata;
use crate::size::Size;
use serde::{Deserialize, Serialize};

/// The canonical, format-independent block model every decoder
/// converges on. Constructed fully by exactly one decoder invocation
/// and immutable afterward, apart from the one-time materials
/// derivation that closes out the decode.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    pub metadata: BlueprintMetadata,
    pub blocks: Vec<PositionedBlock>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Blueprint {
            name: name.into(),
            metadata: BlueprintMetadata::with_size(size),
            blocks: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.metadata.size
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Single entry point for decoders. Coordinates outside the
    /// declared size abort the decode; they are never wrapped or
    /// clamped.
    pub fn push_block(&mut self, block: PositionedBlock) -> Result<(), BlueprintError> {
        if !self.metadata.size.contains(block.x, block.y, block.z) {
            return Err(BlueprintError::SizeInvariantViolation {
                x: block.x,
                y: block.y,
                z: block.z,
                size: self.metadata.size,
            });
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Derives the type -> count histogram from the block list. Every
    /// decoder calls this exactly once as its final step.
    pub fn recalculate_materials(&mut self) -> &HashMap<String, usize> {
        self.metadata.materials = tally_materials(&self.blocks);
        &self.metadata.materials
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Pure multiset count over the block list; idempotent and independent
/// of block order.
pub fn tally_materials(blocks: &[PositionedBlock]) -> HashMap<String, usize> {
    let mut materials = HashMap::new();
    for block in blocks {
        *materials.entry(block.block_type.clone()).or_insert(0) += 1;
    }
    materials
}
