//! # Generation Error Types
//!
//! All errors that can occur while generating or materializing a world.

use thiserror::Error;

/// Errors that can occur in the generation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldGenError {
    /// Width or height was zero, or the cell count overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// Generator configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Resource ratio table is malformed.
    #[error("invalid resource table: {0}")]
    InvalidResourceTable(String),

    /// A tile type name did not match the catalog.
    #[error("unknown tile type: {0:?}")]
    UnknownTileType(String),

    /// Canvas text could not be parsed.
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),
}

/// Result type for generation operations.
pub type WorldGenResult<T> = Result<T, WorldGenError>;
