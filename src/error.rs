use thiserror::Error;

use crate::size::Size;

/// Failure modes of a single decode. All of these are terminal for the
/// file being processed; callers that scan a directory decide whether
/// to skip the file and continue.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    #[error("malformed tag tree: {0}")]
    MalformedTagTree(String),

    #[error("palette index {index} has no entry")]
    PaletteIndexOutOfRange { index: i32 },

    #[error("invalid orientation code {code} for block type '{block_type}'")]
    InvalidOrientationCode { block_type: String, code: u32 },

    #[error("block ({x}, {y}, {z}) lies outside declared size {size:?}")]
    SizeInvariantViolation { x: i32, y: i32, z: i32, size: Size },

    #[error("unrecognized schematic extension '.{0}'")]
    UnknownFormat(String),
}
