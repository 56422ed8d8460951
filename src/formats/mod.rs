use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;
use quartz_nbt::io::Flavor;
use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use crate::blueprint::Blueprint;
use crate::error::BlueprintError;
use crate::legacy_ids::LegacyIdTable;
use crate::size::Size;

pub mod legacy;
pub mod litematic;
pub mod modern;
pub mod sponge;
pub mod structure;

/// The five schematic dialects this crate decodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchematicFormat {
    LegacyArray,
    ModernPalette,
    Structure,
    Sponge,
    Litematic,
}

impl SchematicFormat {
    /// Sponge and litematic containers arrive gzip-wrapped; the rest
    /// store the tag tree bare.
    pub fn compressed(self) -> bool {
        matches!(self, SchematicFormat::Sponge | SchematicFormat::Litematic)
    }
}

/// Returns bytes ready for the tag tree reader, decompressing the
/// formats that need it and passing the rest through unchanged.
pub fn decompress(data: &[u8], format: SchematicFormat) -> Result<Cow<'_, [u8]>, BlueprintError> {
    if format.compressed() {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| BlueprintError::CorruptArchive(e.to_string()))?;
        Ok(Cow::Owned(decompressed))
    } else {
        Ok(Cow::Borrowed(data))
    }
}

/// Parses an uncompressed binary tag tree into its root compound.
pub fn read_tag_tree(data: &[u8]) -> Result<NbtCompound, BlueprintError> {
    let (root, _) = quartz_nbt::io::read_nbt(&mut Cursor::new(data), Flavor::Uncompressed)
        .map_err(|e| BlueprintError::MalformedTagTree(e.to_string()))?;
    Ok(root)
}

/// The two array dialects plus the structure format all share the
/// `.nbt`/`.schematic` extensions; one explicit shape probe picks the
/// decoder. No decoder ever infers format from decode failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArrayDialect {
    Legacy,
    Modern,
    Structure,
}

pub fn probe_array_dialect(root: &NbtCompound) -> ArrayDialect {
    let has_structure_lists = root.get::<_, &NbtList>("blocks").is_ok()
        && root.get::<_, &NbtList>("size").is_ok()
        && root.get::<_, &NbtList>("palette").is_ok();
    if has_structure_lists {
        return ArrayDialect::Structure;
    }
    let has_palette = root.get::<_, &NbtCompound>("Palette").is_ok();
    let has_data = root.get::<_, &NbtTag>("Data").is_ok();
    if has_palette && !has_data {
        ArrayDialect::Modern
    } else {
        ArrayDialect::Legacy
    }
}

/// Boundary entry point: selects a decoder by file extension (probing
/// the tag-tree shape where `.nbt`/`.schematic` stay ambiguous), names
/// the blueprint after the file stem, and runs the decode.
pub fn load_blueprint(
    data: &[u8],
    file_name: &str,
    legacy_table: &dyn LegacyIdTable,
) -> Result<Blueprint, BlueprintError> {
    let path = Path::new(file_name);
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    match extension.as_str() {
        "nbt" | "schematic" => {
            let root = read_tag_tree(data)?;
            let dialect = probe_array_dialect(&root);
            debug!("{} probed as {:?}", file_name, dialect);
            match dialect {
                ArrayDialect::Structure => structure::from_structure(&root, name),
                ArrayDialect::Modern => modern::from_modern(&root, name),
                ArrayDialect::Legacy => legacy::from_legacy(&root, name, legacy_table),
            }
        }
        "schem" => {
            let bytes = decompress(data, SchematicFormat::Sponge)?;
            sponge::from_sponge(&read_tag_tree(&bytes)?, name)
        }
        "litematic" => {
            let bytes = decompress(data, SchematicFormat::Litematic)?;
            litematic::from_litematic(&read_tag_tree(&bytes)?, name)
        }
        other => Err(BlueprintError::UnknownFormat(other.to_string())),
    }
}

// Typed accessors shared by the decoders. Each failure names the field
// so a MalformedTagTree error points at the offending spot.

pub(crate) fn get_compound<'a>(
    parent: &'a NbtCompound,
    key: &str,
) -> Result<&'a NbtCompound, BlueprintError> {
    parent
        .get::<_, &NbtCompound>(key)
        .map_err(|e| BlueprintError::MalformedTagTree(format!("compound '{}': {}", key, e)))
}

pub(crate) fn get_list<'a>(
    parent: &'a NbtCompound,
    key: &str,
) -> Result<&'a NbtList, BlueprintError> {
    parent
        .get::<_, &NbtList>(key)
        .map_err(|e| BlueprintError::MalformedTagTree(format!("list '{}': {}", key, e)))
}

pub(crate) fn get_int(parent: &NbtCompound, key: &str) -> Result<i32, BlueprintError> {
    match parent.get::<_, &NbtTag>(key) {
        Ok(NbtTag::Byte(v)) => Ok(*v as i32),
        Ok(NbtTag::Short(v)) => Ok(*v as i32),
        Ok(NbtTag::Int(v)) => Ok(*v),
        Ok(other) => Err(BlueprintError::MalformedTagTree(format!(
            "field '{}' is not an integer: {:?}",
            key, other
        ))),
        Err(e) => Err(BlueprintError::MalformedTagTree(format!(
            "field '{}': {}",
            key, e
        ))),
    }
}

/// Reads a flat cell array regardless of the integer width the source
/// container chose. Byte arrays are unsigned in every dialect we
/// decode, so `-1i8` reads as 255.
pub(crate) fn get_flat_array(parent: &NbtCompound, key: &str) -> Result<Vec<i32>, BlueprintError> {
    match parent.get::<_, &NbtTag>(key) {
        Ok(NbtTag::ByteArray(values)) => Ok(values.iter().map(|&v| (v as u8) as i32).collect()),
        Ok(NbtTag::IntArray(values)) => Ok(values.clone()),
        Ok(NbtTag::LongArray(values)) => Ok(values.iter().map(|&v| v as i32).collect()),
        Ok(NbtTag::List(list)) => {
            let mut values = Vec::with_capacity(list.len());
            for tag in list.iter() {
                match tag {
                    NbtTag::Byte(v) => values.push((*v as u8) as i32),
                    NbtTag::Short(v) => values.push(*v as i32),
                    NbtTag::Int(v) => values.push(*v),
                    other => {
                        return Err(BlueprintError::MalformedTagTree(format!(
                            "list '{}' holds a non-integer element: {:?}",
                            key, other
                        )))
                    }
                }
            }
            Ok(values)
        }
        Ok(other) => Err(BlueprintError::MalformedTagTree(format!(
            "field '{}' is not a cell array: {:?}",
            key, other
        ))),
        Err(e) => Err(BlueprintError::MalformedTagTree(format!(
            "field '{}': {}",
            key, e
        ))),
    }
}

/// Reads the Width/Height/Length dimension triple the array dialects
/// share and validates the size invariant.
pub(crate) fn read_dimensions(parent: &NbtCompound) -> Result<Size, BlueprintError> {
    let width = get_int(parent, "Width")?;
    let height = get_int(parent, "Height")?;
    let length = get_int(parent, "Length")?;
    checked_size(width, height, length)
}

pub(crate) fn checked_size(x: i32, y: i32, z: i32) -> Result<Size, BlueprintError> {
    if x < 0 || y < 0 || z < 0 {
        return Err(BlueprintError::MalformedTagTree(format!(
            "negative dimensions ({}, {}, {})",
            x, y, z
        )));
    }
    Ok(Size::new(x, y, z))
}

/// Guards the flat-array loops: the array must cover the declared
/// volume, and a declared-empty structure cannot carry cells.
pub(crate) fn check_cell_count(len: usize, size: Size) -> Result<(), BlueprintError> {
    if len < size.volume() {
        return Err(BlueprintError::MalformedTagTree(format!(
            "cell array holds {} entries but the declared size needs {}",
            len,
            size.volume()
        )));
    }
    if size.volume() == 0 && len > 0 {
        return Err(BlueprintError::MalformedTagTree(format!(
            "cell array holds {} entries but the declared size is empty",
            len
        )));
    }
    Ok(())
}
