use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use crate::block::normalize_type_name;
use crate::error::BlueprintError;

/// Format-local mapping from a small integer index to a normalized
/// type name. Built once per decode as an explicit index-keyed
/// association and discarded once the block list is materialized.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Palette {
    entries: Vec<Option<String>>,
}

impl Palette {
    pub fn new() -> Self {
        Palette {
            entries: Vec::new(),
        }
    }

    /// Builds a palette from a name -> integer compound, the shape the
    /// legacy, modern and sponge containers share. Indices may be
    /// sparse.
    pub fn from_name_map(compound: &NbtCompound) -> Result<Self, BlueprintError> {
        let mut palette = Palette::new();
        for (name, tag) in compound.inner() {
            let index = match tag {
                NbtTag::Int(index) => *index,
                other => {
                    return Err(BlueprintError::MalformedTagTree(format!(
                        "palette entry '{}' is not an integer index: {:?}",
                        name, other
                    )))
                }
            };
            if index < 0 {
                return Err(BlueprintError::MalformedTagTree(format!(
                    "palette entry '{}' has negative index {}",
                    name, index
                )));
            }
            palette.insert(index as usize, normalize_type_name(name));
        }
        Ok(palette)
    }

    /// Builds a palette from a list of state compounds carrying a
    /// `Name` field, the shape the structure and litematic containers
    /// use. List order is index order.
    pub fn from_state_list(list: &NbtList) -> Result<Self, BlueprintError> {
        let mut palette = Palette::new();
        for tag in list.iter() {
            let compound = match tag {
                NbtTag::Compound(compound) => compound,
                other => {
                    return Err(BlueprintError::MalformedTagTree(format!(
                        "palette entry is not a compound: {:?}",
                        other
                    )))
                }
            };
            let name = compound.get::<_, &str>("Name").map_err(|e| {
                BlueprintError::MalformedTagTree(format!("palette entry missing Name: {}", e))
            })?;
            palette.push(normalize_type_name(name));
        }
        Ok(palette)
    }

    pub fn push(&mut self, name: String) {
        self.entries.push(Some(name));
    }

    pub fn insert(&mut self, index: usize, name: String) {
        if index >= self.entries.len() {
            self.entries.resize(index + 1, None);
        }
        self.entries[index] = Some(name);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An index with no entry is an error, never air.
    pub fn resolve(&self, index: i32) -> Result<&str, BlueprintError> {
        if index < 0 {
            return Err(BlueprintError::PaletteIndexOutOfRange { index });
        }
        self.entries
            .get(index as usize)
            .and_then(|entry| entry.as_deref())
            .ok_or(BlueprintError::PaletteIndexOutOfRange { index })
    }
}
