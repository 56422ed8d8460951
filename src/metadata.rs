use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::size::Size;

/// Descriptive data carried alongside the block list. `materials` is
/// always derived from the block list and never edited independently;
/// `tags` stays empty here and is filled in by an external catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlueprintMetadata {
    pub size: Size,
    #[serde(default)]
    pub materials: HashMap<String, usize>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlueprintMetadata {
    pub fn with_size(size: Size) -> Self {
        BlueprintMetadata {
            size,
            materials: HashMap::new(),
            tags: Vec::new(),
        }
    }
}
