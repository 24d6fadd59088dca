//! # World Constants
//!
//! Stock dimensions and asset layout.

// =============================================================================
// WINDOW & GRID
// =============================================================================

/// Tile edge length in pixels.
pub const TILE_EDGE: u32 = 32;

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = TILE_EDGE * 25;

/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = TILE_EDGE * 20;

/// Default world width in tiles (one window).
pub const WORLD_WIDTH: usize = (WINDOW_WIDTH / TILE_EDGE) as usize;

/// Default world height in tiles (one window).
pub const WORLD_HEIGHT: usize = (WINDOW_HEIGHT / TILE_EDGE) as usize;

// =============================================================================
// ASSET LAYOUT
// =============================================================================

/// Default asset root, relative to the working directory.
pub const ASSET_ROOT: &str = "./assets";

/// Ground textures, relative to the asset root.
pub const GROUND_IMAGE_DIR: &str = "image/ground";

/// Object (resource) textures, relative to the asset root.
pub const OBJECT_IMAGE_DIR: &str = "image/object";
