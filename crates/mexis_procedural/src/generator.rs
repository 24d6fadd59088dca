//! # Terrain Generator
//!
//! Stamps water blobs onto a blank canvas.
//!
//! ## Algorithm
//!
//! 1. Seed one [`WorldRng`] from the world seed.
//! 2. Fill a density grid, row-major, with draws from `[0, water_frequency)`.
//! 3. Scan row-major. A cell whose density is 0 and which no earlier disc has
//!    claimed becomes a blob seed: it is marked [`Symbol::Center`], a radius is
//!    drawn from `[min_radius, max_radius]`, and every in-bounds cell within
//!    that Euclidean distance (boundary inclusive) becomes [`Symbol::Rim`] and
//!    is claimed in the processed mask.
//! 4. Return the canvas.
//!
//! The seed cell is inside its own disc, so its center marker never survives.
//! Discs are clipped at the grid edges; there is no wraparound.

use mexis_core::Grid;
use tracing::{debug, trace};

use crate::canvas::{check_dimensions, Canvas, Symbol};
use crate::config::GeneratorConfig;
use crate::error::WorldGenResult;
use crate::seed::{WorldRng, WorldSeed};

/// Generates a canvas with the stock configuration.
///
/// # Errors
///
/// Returns [`crate::WorldGenError::InvalidDimensions`] if `width` or `height`
/// is zero.
///
/// # Example
///
/// ```rust
/// let a = mexis_procedural::generate(5, 5, 42).unwrap();
/// let b = mexis_procedural::generate(5, 5, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(width: usize, height: usize, seed: u64) -> WorldGenResult<Canvas> {
    TerrainGenerator::default().generate(width, height, WorldSeed::new(seed))
}

/// Terrain generator.
///
/// Holds only configuration; each [`TerrainGenerator::generate`] call owns
/// its grids and random stream and discards them on return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerrainGenerator {
    config: GeneratorConfig,
}

impl TerrainGenerator {
    /// Creates a generator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WorldGenError::InvalidConfig`] if the configuration
    /// fails validation.
    pub fn new(config: GeneratorConfig) -> WorldGenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a `width x height` canvas.
    ///
    /// Pure in `(width, height, seed, config)`: identical inputs give a
    /// byte-identical canvas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WorldGenError::InvalidDimensions`] if `width` or
    /// `height` is zero.
    pub fn generate(&self, width: usize, height: usize, seed: WorldSeed) -> WorldGenResult<Canvas> {
        let mut pass = GenerationPass::new(&self.config, width, height, seed)?;
        pass.scan();

        debug!(
            width,
            height,
            seed = seed.value(),
            blobs = pass.blobs.len(),
            water_cells = pass.canvas.count(Symbol::Rim),
            "terrain generated"
        );

        Ok(pass.canvas)
    }
}

/// Cells already claimed by a disc. Cells are only ever claimed, never released.
struct ProcessedMask {
    cells: Grid<bool>,
}

impl ProcessedMask {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Grid::new(width, height, false),
        }
    }

    #[inline]
    fn claim(&mut self, x: usize, y: usize) {
        self.cells.set(x, y, true);
    }

    #[inline]
    fn is_claimed(&self, x: usize, y: usize) -> bool {
        self.cells.get(x, y).copied().unwrap_or(false)
    }
}

/// A stamped disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Blob {
    x: usize,
    y: usize,
    radius: u32,
}

/// State for one generation call.
struct GenerationPass<'a> {
    config: &'a GeneratorConfig,
    rng: WorldRng,
    density: Grid<u32>,
    canvas: Canvas,
    processed: ProcessedMask,
    blobs: Vec<Blob>,
}

impl<'a> GenerationPass<'a> {
    fn new(
        config: &'a GeneratorConfig,
        width: usize,
        height: usize,
        seed: WorldSeed,
    ) -> WorldGenResult<Self> {
        check_dimensions(width, height)?;

        let mut rng = WorldRng::from_seed(seed);
        let density = Grid::from_fn(width, height, |_, _| rng.below(config.water_frequency));

        Ok(Self {
            config,
            rng,
            density,
            canvas: Canvas::blank(width, height)?,
            processed: ProcessedMask::new(width, height),
            blobs: Vec::new(),
        })
    }

    fn scan(&mut self) {
        for y in 0..self.canvas.height() {
            for x in 0..self.canvas.width() {
                self.visit(x, y);
            }
        }
    }

    /// Visits one cell of the scan. Returns true if it seeded a blob.
    fn visit(&mut self, x: usize, y: usize) -> bool {
        if self.density.get(x, y) != Some(&0) || self.processed.is_claimed(x, y) {
            return false;
        }

        self.canvas.set(x, y, Symbol::Center);
        let radius = self
            .rng
            .between(self.config.min_radius, self.config.max_radius);
        self.stamp_disc(x, y, radius);

        let blob = Blob { x, y, radius };
        trace!(x = blob.x, y = blob.y, radius = blob.radius, "blob stamped");
        self.blobs.push(blob);
        true
    }

    /// Writes a filled disc of rim cells, clipped to the grid.
    fn stamp_disc(&mut self, cx: usize, cy: usize, radius: u32) {
        let r = radius as usize;
        let r_sq = u64::from(radius) * u64::from(radius);
        let x_max = cx.saturating_add(r).min(self.canvas.width() - 1);
        let y_max = cy.saturating_add(r).min(self.canvas.height() - 1);

        for y in cy.saturating_sub(r)..=y_max {
            let dy = y.abs_diff(cy) as u64;
            for x in cx.saturating_sub(r)..=x_max {
                let dx = x.abs_diff(cx) as u64;
                if dx * dx + dy * dy <= r_sq {
                    self.canvas.set(x, y, Symbol::Rim);
                    self.processed.claim(x, y);
                }
            }
        }
    }
}
