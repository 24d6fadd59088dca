//! # World Configuration
//!
//! Everything needed to build a world, loadable from one TOML file:
//!
//! ```toml
//! width = 25
//! height = 20
//! seed = 42
//! tile_edge = 32
//! assets = "./assets"
//!
//! [generator]
//! water_frequency = 200
//! min_radius = 3
//! max_radius = 5
//!
//! [resources]
//! empty = 0.2
//! grass = 0.35
//! iron = 0.15
//! stone = 0.15
//! tree = 0.15
//! ```
//!
//! Every key is optional. A `[resources]` table replaces the stock mix
//! entirely; an empty table disables the resource map.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mexis_procedural::{GeneratorConfig, ResourceTable, WorldGenResult};
use serde::{Deserialize, Serialize};

use crate::constants::{TILE_EDGE, WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::{AppError, AppResult};

/// Top-level world settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// World width in tiles.
    pub width: usize,
    /// World height in tiles.
    pub height: usize,
    /// World seed.
    pub seed: u64,
    /// Tile edge length in pixels.
    pub tile_edge: u32,
    /// Asset root for the texture catalog; headless when unset.
    pub assets: Option<PathBuf>,
    /// Terrain generator settings.
    pub generator: GeneratorConfig,
    /// Resource ratios keyed by tile name.
    pub resources: BTreeMap<String, f64>,
}

impl WorldConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigParse`] if the text is not valid TOML for
    /// this struct.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigRead`] if the file cannot be read, or
    /// [`AppError::ConfigParse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resource table for the configured ratios, or `None` if no ratios are
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not a resource tile or the ratios are
    /// out of range.
    pub fn resource_table(&self) -> WorldGenResult<Option<ResourceTable>> {
        if self.resources.is_empty() {
            return Ok(None);
        }
        let ratios = self
            .resources
            .iter()
            .map(|(name, ratio)| (name.as_str(), *ratio));
        ResourceTable::from_named(ratios).map(Some)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        let resources = ResourceTable::default()
            .entries()
            .iter()
            .map(|entry| (entry.kind.name().to_owned(), entry.ratio))
            .collect();

        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            seed: 0,
            tile_edge: TILE_EDGE,
            assets: None,
            generator: GeneratorConfig::default(),
            resources,
        }
    }
}
