use crate::blueprint::Blueprint;
use crate::planner::plan;

impl std::fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blueprint")
            .field("name", &self.name)
            .field("size", &self.metadata.size)
            .field("blocks", &self.blocks.len())
            .field("materials", &self.metadata.materials.len())
            .finish()
    }
}

/// Human-readable summary of a blueprint: dimensions, material
/// counts, and the per-layer block tally the planner would produce.
pub fn format_blueprint(blueprint: &Blueprint) -> String {
    let size = blueprint.size();
    let mut out = format!(
        "Blueprint '{}' ({}x{}x{}, {} blocks)\n",
        blueprint.name,
        size.x,
        size.y,
        size.z,
        blueprint.block_count()
    );

    out.push_str("Materials:\n");
    let mut materials: Vec<_> = blueprint.metadata.materials.iter().collect();
    materials.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (block_type, count) in materials {
        out.push_str(&format!("  {} x{}\n", block_type, count));
    }

    out.push_str("Layers:\n");
    for layer in plan(&blueprint.blocks) {
        out.push_str(&format!("  y={}: {} blocks\n", layer.y, layer.blocks.len()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::PositionedBlock;
    use crate::size::Size;

    #[test]
    fn test_format_blueprint_lists_materials_and_layers() {
        let mut blueprint = Blueprint::new("hut", Size::new(2, 2, 1));
        blueprint
            .push_block(PositionedBlock::new(0, 0, 0, "stone", 0))
            .unwrap();
        blueprint
            .push_block(PositionedBlock::new(1, 0, 0, "stone", 0))
            .unwrap();
        blueprint
            .push_block(PositionedBlock::new(0, 1, 0, "torch", 5))
            .unwrap();
        blueprint.recalculate_materials();

        let text = format_blueprint(&blueprint);
        assert!(text.contains("Blueprint 'hut' (2x2x1, 3 blocks)"));
        assert!(text.contains("stone x2"));
        assert!(text.contains("y=0: 2 blocks"));
        assert!(text.contains("y=1: 1 blocks"));
    }
}
