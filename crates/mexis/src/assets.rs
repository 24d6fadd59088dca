//! # Texture Catalog
//!
//! Loads every tile texture once, up front, and hands out shared handles.
//!
//! ## Layout
//!
//! ```text
//! <root>/image/ground/dirt.png
//! <root>/image/ground/water.png
//! <root>/image/object/grass.png
//! <root>/image/object/tree.png
//! <root>/image/object/stone.png
//! <root>/image/object/iron.png
//! ```
//!
//! `empty` has no texture. A missing or unreadable file fails the whole load
//! with the offending path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mexis_procedural::{TileAsset, TileFactory, TileType};
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{GROUND_IMAGE_DIR, OBJECT_IMAGE_DIR};

/// Asset loading errors.
#[derive(Error, Debug)]
pub enum AssetError {
    /// A texture file could not be opened or decoded.
    #[error("failed to load asset {}", path.display())]
    AssetLoadFailure {
        /// File that failed.
        path: PathBuf,
        /// Decoder or I/O failure.
        #[source]
        source: image::ImageError,
    },
}

/// Texture path for `kind` relative to the asset root, or `None` for
/// invisible tiles.
#[must_use]
pub fn texture_path(kind: TileType) -> Option<PathBuf> {
    let dir = match kind {
        TileType::Dirt | TileType::Water => GROUND_IMAGE_DIR,
        TileType::Grass | TileType::Tree | TileType::Stone | TileType::Iron => OBJECT_IMAGE_DIR,
        TileType::Empty => return None,
    };
    Some(Path::new(dir).join(format!("{}.png", kind.name())))
}

/// Shared reference to a loaded texture.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    kind: TileType,
    path: Arc<Path>,
}

impl TextureHandle {
    /// Tile type this texture draws.
    #[must_use]
    pub const fn kind(&self) -> TileType {
        self.kind
    }

    /// Source file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Every tile texture under one asset root.
#[derive(Debug)]
pub struct TextureCatalog {
    root: PathBuf,
    assets: HashMap<TileType, TileAsset<TextureHandle>>,
}

impl TextureCatalog {
    /// Loads all textures under `root`.
    ///
    /// Tiles are drawn at the texture's native size.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::AssetLoadFailure`] for the first texture that
    /// cannot be read.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, AssetError> {
        let root = root.as_ref().to_path_buf();
        let mut assets = HashMap::with_capacity(TileType::ALL.len());

        for kind in TileType::ALL {
            let asset = match texture_path(kind) {
                Some(relative) => {
                    let path = root.join(relative);
                    let (width, height) = image::image_dimensions(&path).map_err(|source| {
                        AssetError::AssetLoadFailure {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    debug!(kind = %kind, path = %path.display(), width, height, "texture loaded");
                    let handle = TextureHandle {
                        kind,
                        path: Arc::from(path.as_path()),
                    };
                    TileAsset::new(handle, width, height)
                }
                None => TileAsset::none(),
            };
            assets.insert(kind, asset);
        }

        info!(root = %root.display(), textures = assets.len(), "texture catalog ready");
        Ok(Self { root, assets })
    }

    /// Asset root the catalog was loaded from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TileFactory for TextureCatalog {
    type Handle = TextureHandle;

    fn asset(&self, kind: TileType) -> TileAsset<TextureHandle> {
        self.assets.get(&kind).cloned().unwrap_or_else(TileAsset::none)
    }
}
