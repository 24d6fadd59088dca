//! # Tile Materializer
//!
//! Turns a [`Canvas`] into a [`WorldMap`] of typed, positioned tiles.
//!
//! | Symbol | Tile | Rotation |
//! |---|---|---|
//! | rim, center | water | 0 |
//! | blank | dirt | random quarter turn |
//!
//! Rotation draws come from the caller's [`WorldRng`], one per dirt cell in
//! row-major order.

use std::fmt;

use mexis_core::Grid;
use tracing::debug;

use crate::canvas::{Canvas, Symbol};
use crate::seed::WorldRng;
use crate::tile::{Rotation, Tile, TileFactory, TileType};

/// Name given to materialized ground maps.
pub const GROUND_MAP_NAME: &str = "ground";

/// A named grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldMap<H> {
    name: String,
    tiles: Grid<Tile<H>>,
}

impl<H> WorldMap<H> {
    pub(crate) fn new(name: impl Into<String>, tiles: Grid<Tile<H>>) -> Self {
        Self {
            name: name.into(),
            tiles,
        }
    }

    /// Map label (`"ground"`, `"resource"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.tiles.height()
    }

    /// Tile at grid position `(x, y)`.
    #[must_use]
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile<H>> {
        self.tiles.get(x, y)
    }

    /// The tile grid.
    #[must_use]
    pub const fn tiles(&self) -> &Grid<Tile<H>> {
        &self.tiles
    }

    /// Number of tiles of `kind`.
    #[must_use]
    pub fn count(&self, kind: TileType) -> usize {
        self.tiles.count(|tile| tile.kind == kind)
    }

    /// Tile types only, same shape as the map.
    #[must_use]
    pub fn kinds(&self) -> Grid<TileType> {
        self.tiles.map(|tile| tile.kind)
    }
}

/// One row per line, tile type labels separated by spaces.
impl<H> fmt::Display for WorldMap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(tile.kind.name())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pixel coordinate of a grid index, saturating instead of overflowing.
#[inline]
pub(crate) fn pixel(index: usize, tile_edge: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(tile_edge)
}

/// Canvas-to-tile mapper bound to a tile size and a tile factory.
#[derive(Clone, Debug)]
pub struct Materializer<F> {
    tile_edge: u32,
    factory: F,
}

impl<F: TileFactory> Materializer<F> {
    /// Creates a materializer placing tiles every `tile_edge` pixels.
    #[must_use]
    pub const fn new(tile_edge: u32, factory: F) -> Self {
        Self { tile_edge, factory }
    }

    /// Builds the ground map for `canvas`.
    pub fn materialize(&self, canvas: &Canvas, rng: &mut WorldRng) -> WorldMap<F::Handle> {
        let tiles = Grid::from_fn(canvas.width(), canvas.height(), |x, y| {
            match canvas.get(x, y).unwrap_or_default() {
                Symbol::Rim | Symbol::Center => self.place(TileType::Water, x, y, Rotation::Deg0),
                Symbol::Blank => self.place(TileType::Dirt, x, y, Rotation::random(rng)),
            }
        });
        let map = WorldMap::new(GROUND_MAP_NAME, tiles);

        debug!(
            width = map.width(),
            height = map.height(),
            water = map.count(TileType::Water),
            dirt = map.count(TileType::Dirt),
            "ground map materialized"
        );
        map
    }

    /// Builds one tile at grid position `(x, y)`.
    fn place(&self, kind: TileType, x: usize, y: usize, rotation: Rotation) -> Tile<F::Handle> {
        Tile::new(
            kind,
            self.factory.asset(kind),
            rotation,
            pixel(x, self.tile_edge),
            pixel(y, self.tile_edge),
        )
    }
}

/// Builds the ground map for `canvas` with `tile_edge_length`-pixel tiles.
///
/// Exactly one tile per canvas cell: water where the canvas is rim (or
/// center), dirt with a random rotation elsewhere.
pub fn materialize<F: TileFactory>(
    canvas: &Canvas,
    tile_edge_length: u32,
    factory: &F,
    rng: &mut WorldRng,
) -> WorldMap<F::Handle> {
    Materializer::new(tile_edge_length, factory).materialize(canvas, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::WorldSeed;
    use crate::tile::HeadlessTiles;

    fn rng() -> WorldRng {
        WorldRng::from_seed(WorldSeed::new(1))
    }

    #[test]
    fn test_symbol_mapping() {
        let canvas: Canvas = "o. \n  o\n".parse().unwrap();
        let map = materialize(&canvas, 32, &HeadlessTiles::new(32), &mut rng());

        assert_eq!(map.name(), GROUND_MAP_NAME);
        assert_eq!(map.tile(0, 0).unwrap().kind, TileType::Water);
        assert_eq!(map.tile(1, 0).unwrap().kind, TileType::Water);
        assert_eq!(map.tile(2, 0).unwrap().kind, TileType::Dirt);
        assert_eq!(map.tile(2, 1).unwrap().kind, TileType::Water);
        assert_eq!(map.count(TileType::Water), 3);
        assert_eq!(map.count(TileType::Dirt), 3);
    }

    #[test]
    fn test_water_is_never_rotated() {
        let canvas: Canvas = "ooooo\nooooo".parse().unwrap();
        let map = materialize(&canvas, 8, &HeadlessTiles::new(8), &mut rng());
        assert!(map.tiles().as_slice().iter().all(|t| t.rotation == Rotation::Deg0));
    }

    #[test]
    fn test_positions_and_assets() {
        let canvas = Canvas::blank(2, 2).unwrap();
        let map = materialize(&canvas, 16, &HeadlessTiles::new(20), &mut rng());

        let tile = map.tile(1, 1).unwrap();
        assert_eq!((tile.x, tile.y), (16, 16));
        assert_eq!((tile.width, tile.height), (20, 20));
        assert_eq!(tile.handle, Some(TileType::Dirt));
    }

    #[test]
    fn test_rotations_follow_the_stream() {
        let canvas = Canvas::blank(6, 6).unwrap();
        let factory = HeadlessTiles::new(32);
        let a = materialize(&canvas, 32, &factory, &mut rng());
        let b = materialize(&canvas, 32, &factory, &mut rng());
        assert_eq!(a, b);

        let mut other = WorldRng::from_seed(WorldSeed::new(99));
        let c = materialize(&canvas, 32, &factory, &mut other);
        assert_ne!(
            a.tiles().map(|t| t.rotation),
            c.tiles().map(|t| t.rotation),
            "different streams should rotate differently"
        );
    }

    #[test]
    fn test_display_labels() {
        let canvas: Canvas = "o \n o".parse().unwrap();
        let map = materialize(&canvas, 32, &HeadlessTiles::new(32), &mut rng());
        assert_eq!(map.to_string(), "water dirt\ndirt water\n");
    }

    #[test]
    fn test_pixel_saturates() {
        assert_eq!(pixel(3, 32), 96);
        assert_eq!(pixel(usize::MAX, 2), u32::MAX);
        assert_eq!(pixel(1 << 20, 1 << 20), u32::MAX);
    }
}
