//! # World Builder
//!
//! Runs the full pipeline for one seed: terrain canvas, ground map, and
//! (optionally) the resource map.
//!
//! ## Random Streams
//!
//! Each pass draws from its own stream so that changing one pass never
//! shifts another:
//!
//! | Pass      | Stream                                   |
//! |-----------|------------------------------------------|
//! | Terrain   | `seed`                                   |
//! | Rotation  | `seed.derive(streams::ROTATION)`         |
//! | Resources | `seed.derive(streams::RESOURCES)`        |

use mexis_procedural::{
    materialize, streams, Canvas, GeneratorConfig, ResourceTable, TerrainGenerator, TileFactory,
    WorldMap, WorldRng, WorldSeed,
};
use tracing::info;

use crate::config::WorldConfig;
use crate::constants::TILE_EDGE;
use crate::error::AppResult;

/// A generated world.
#[derive(Clone, Debug)]
pub struct World<H> {
    /// Seed the world was built from.
    pub seed: WorldSeed,
    /// Terrain symbols.
    pub canvas: Canvas,
    /// Water and dirt tiles.
    pub ground: WorldMap<H>,
    /// Resources scattered over the dirt, if a table was configured.
    pub resources: Option<WorldMap<H>>,
}

/// Builds [`World`]s from validated settings.
#[derive(Clone, Debug)]
pub struct WorldBuilder {
    width: usize,
    height: usize,
    seed: WorldSeed,
    tile_edge: u32,
    generator: TerrainGenerator,
    resources: Option<ResourceTable>,
}

impl WorldBuilder {
    /// Builder for a `width x height` world with stock settings and no
    /// resource map.
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed: WorldSeed::new(seed),
            tile_edge: TILE_EDGE,
            generator: TerrainGenerator::default(),
            resources: None,
        }
    }

    /// Builder for everything a [`WorldConfig`] describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator settings or the resource table are
    /// invalid.
    pub fn from_config(config: &WorldConfig) -> AppResult<Self> {
        Ok(Self {
            width: config.width,
            height: config.height,
            seed: WorldSeed::new(config.seed),
            tile_edge: config.tile_edge,
            generator: TerrainGenerator::new(config.generator)?,
            resources: config.resource_table()?,
        })
    }

    /// Replaces the generator settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_generator(mut self, config: GeneratorConfig) -> AppResult<Self> {
        self.generator = TerrainGenerator::new(config)?;
        Ok(self)
    }

    /// Adds a resource map built from `table`.
    #[must_use]
    pub fn with_resources(mut self, table: ResourceTable) -> Self {
        self.resources = Some(table);
        self
    }

    /// Sets the tile edge length in pixels.
    #[must_use]
    pub const fn with_tile_edge(mut self, tile_edge: u32) -> Self {
        self.tile_edge = tile_edge;
        self
    }

    /// Generates the world, drawing assets from `factory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or overflow.
    pub fn build<F: TileFactory>(&self, factory: &F) -> AppResult<World<F::Handle>> {
        let canvas = self.generator.generate(self.width, self.height, self.seed)?;

        let mut rotation_rng = WorldRng::from_seed(self.seed.derive(streams::ROTATION));
        let ground = materialize(&canvas, self.tile_edge, factory, &mut rotation_rng);

        let resources = self.resources.as_ref().map(|table| {
            let mut rng = WorldRng::from_seed(self.seed.derive(streams::RESOURCES));
            table.overlay(&ground, factory, &mut rng)
        });

        info!(
            seed = self.seed.value(),
            width = self.width,
            height = self.height,
            resources = resources.is_some(),
            "world built"
        );

        Ok(World {
            seed: self.seed,
            canvas,
            ground,
            resources,
        })
    }
}
