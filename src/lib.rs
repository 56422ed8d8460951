mod block;
mod blueprint;
mod error;
mod formats;
mod legacy_ids;
mod metadata;
mod orientation;
mod palette;
mod planner;
mod print_utils;
mod size;
mod utils;

// Public re-exports
pub use block::{normalize_type_name, PositionedBlock};
pub use blueprint::{tally_materials, Blueprint};
pub use error::BlueprintError;
pub use formats::{
    decompress, legacy, litematic, load_blueprint, modern, probe_array_dialect, read_tag_tree,
    sponge, structure, ArrayDialect, SchematicFormat,
};
pub use legacy_ids::{LegacyIdTable, MemoryLegacyTable};
pub use metadata::BlueprintMetadata;
pub use orientation::{resolve_face, Face};
pub use planner::{placement_sequence, plan, Layer, PlacementStep};
pub use print_utils::format_blueprint;
pub use size::Size;
