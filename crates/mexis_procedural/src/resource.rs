//! # Resource Overlay
//!
//! Scatters resources (stone, iron, trees, grass, empty plots) over the dirt
//! cells of a ground map.
//!
//! ## Selection
//!
//! Each dirt cell draws `u` in `[0, 1)` and walks the table's cumulative
//! ratios; the first entry whose running total exceeds `u` wins. If none
//! does (the table sums to less than 1), the cell stays dirt. Water cells are
//! copied unchanged and consume no draw.
//!
//! Entries are always walked in tile name order (`empty`, `grass`, `iron`,
//! `stone`, `tree`) regardless of how the table was written, so a given
//! seed always places the same resources.

use mexis_core::Grid;
use tracing::{debug, warn};

use crate::error::{WorldGenError, WorldGenResult};
use crate::materializer::WorldMap;
use crate::seed::WorldRng;
use crate::tile::{Rotation, Tile, TileFactory, TileType};

/// Name given to resource maps.
pub const RESOURCE_MAP_NAME: &str = "resource";

/// Slack allowed when checking that ratios sum to at most 1.
const RATIO_TOLERANCE: f64 = 1e-9;

/// One row of a resource table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceEntry {
    /// Resource placed.
    pub kind: TileType,
    /// Share of dirt cells, in `[0, 1]`.
    pub ratio: f64,
}

/// Validated ratios over resource tile types.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceTable {
    /// Entries sorted by tile name.
    entries: Vec<ResourceEntry>,
    /// Sum of all ratios.
    total: f64,
}

impl ResourceTable {
    /// Builds a table from `(type, ratio)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::InvalidResourceTable`] if a type is not a
    /// resource, appears twice, has a ratio outside `[0, 1]`, or the ratios
    /// sum to more than 1.
    pub fn new(ratios: impl IntoIterator<Item = (TileType, f64)>) -> WorldGenResult<Self> {
        let mut entries: Vec<ResourceEntry> = Vec::new();

        for (kind, ratio) in ratios {
            if !kind.is_resource() {
                return Err(WorldGenError::InvalidResourceTable(format!(
                    "{kind} is not a resource"
                )));
            }
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(WorldGenError::InvalidResourceTable(format!(
                    "{kind} ratio {ratio} is outside [0, 1]"
                )));
            }
            if entries.iter().any(|e| e.kind == kind) {
                return Err(WorldGenError::InvalidResourceTable(format!(
                    "{kind} listed twice"
                )));
            }
            entries.push(ResourceEntry { kind, ratio });
        }

        let total: f64 = entries.iter().map(|e| e.ratio).sum();
        if total > 1.0 + RATIO_TOLERANCE {
            return Err(WorldGenError::InvalidResourceTable(format!(
                "ratios sum to {total}, which exceeds 1"
            )));
        }
        if total < 1.0 - RATIO_TOLERANCE {
            warn!(unassigned = 1.0 - total, "resource table leaves some dirt uncovered");
        }

        entries.sort_by_key(|e| e.kind.name());
        Ok(Self { entries, total })
    }

    /// Builds a table from `(name, ratio)` pairs, e.g. a parsed config file.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::UnknownTileType`] for an unknown name, or any
    /// error from [`ResourceTable::new`].
    pub fn from_named<'a>(ratios: impl IntoIterator<Item = (&'a str, f64)>) -> WorldGenResult<Self> {
        let parsed = ratios
            .into_iter()
            .map(|(name, ratio)| Ok((name.parse::<TileType>()?, ratio)))
            .collect::<WorldGenResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Entries in selection order.
    #[must_use]
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Sum of all ratios.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Resource selected by a draw in `[0, 1)`, or `None` to keep the dirt.
    #[must_use]
    pub fn pick(&self, draw: f64) -> Option<TileType> {
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.ratio;
            if draw < cumulative {
                return Some(entry.kind);
            }
        }
        None
    }

    /// Builds a resource map from a ground map.
    ///
    /// The ground map is left untouched. Resource tiles take their position
    /// from the dirt tile they replace and are never rotated.
    pub fn overlay<F: TileFactory>(
        &self,
        ground: &WorldMap<F::Handle>,
        factory: &F,
        rng: &mut WorldRng,
    ) -> WorldMap<F::Handle> {
        let mut placed = 0usize;

        let tiles: Grid<Tile<F::Handle>> = ground.tiles().map(|tile| {
            if tile.kind != TileType::Dirt {
                return tile.clone();
            }
            match self.pick(rng.unit()) {
                Some(kind) => {
                    placed += 1;
                    Tile::new(kind, factory.asset(kind), Rotation::Deg0, tile.x, tile.y)
                }
                None => tile.clone(),
            }
        });

        debug!(placed, total_ratio = self.total, "resource overlay applied");
        WorldMap::new(RESOURCE_MAP_NAME, tiles)
    }
}

impl Default for ResourceTable {
    /// Stock mix: stone 15%, iron 15%, tree 15%, grass 35%, empty 20%.
    fn default() -> Self {
        let entries = vec![
            ResourceEntry { kind: TileType::Empty, ratio: 0.20 },
            ResourceEntry { kind: TileType::Grass, ratio: 0.35 },
            ResourceEntry { kind: TileType::Iron, ratio: 0.15 },
            ResourceEntry { kind: TileType::Stone, ratio: 0.15 },
            ResourceEntry { kind: TileType::Tree, ratio: 0.15 },
        ];
        let total = entries.iter().map(|e| e.ratio).sum();
        Self { entries, total }
    }
}
