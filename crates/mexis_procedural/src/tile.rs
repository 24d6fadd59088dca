//! # Tiles
//!
//! The closed catalog of tile types, and the seam through which the
//! rendering layer supplies a drawable asset for each type.

use std::fmt;
use std::str::FromStr;

use crate::error::WorldGenError;
use crate::seed::WorldRng;

/// Tile types in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileType {
    /// Bare ground.
    Dirt = 0,
    /// Lake water.
    Water = 1,
    /// Grass tuft (resource).
    Grass = 2,
    /// Tree (resource).
    Tree = 3,
    /// Stone deposit (resource).
    Stone = 4,
    /// Iron deposit (resource).
    Iron = 5,
    /// Nothing; has no texture and no size.
    Empty = 6,
}

impl TileType {
    /// Every tile type.
    pub const ALL: [Self; 7] = [
        Self::Dirt,
        Self::Water,
        Self::Grass,
        Self::Tree,
        Self::Stone,
        Self::Iron,
        Self::Empty,
    ];

    /// Types a resource overlay may place.
    pub const RESOURCES: [Self; 5] = [Self::Stone, Self::Iron, Self::Tree, Self::Grass, Self::Empty];

    /// Lowercase label, as printed in map dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dirt => "dirt",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Tree => "tree",
            Self::Stone => "stone",
            Self::Iron => "iron",
            Self::Empty => "empty",
        }
    }

    /// Returns true for types a resource overlay may place.
    #[must_use]
    pub const fn is_resource(self) -> bool {
        !matches!(self, Self::Dirt | Self::Water)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileType {
    type Err = WorldGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WorldGenError::UnknownTileType(s.to_owned()))
    }
}

/// Quarter-turn rotation applied when drawing a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// 90 degrees clockwise.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees clockwise.
    Deg270,
}

impl Rotation {
    /// All four rotations.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Draws a uniformly random rotation.
    pub fn random(rng: &mut WorldRng) -> Self {
        rng.pick(&Self::ALL).unwrap_or_default()
    }
}

/// What the rendering layer hands back for a tile type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileAsset<H> {
    /// Drawable handle; `None` for tiles with no texture.
    pub handle: Option<H>,
    /// Draw width in pixels.
    pub width: u32,
    /// Draw height in pixels.
    pub height: u32,
}

impl<H> TileAsset<H> {
    /// An asset with a handle and draw size.
    #[must_use]
    pub const fn new(handle: H, width: u32, height: u32) -> Self {
        Self {
            handle: Some(handle),
            width,
            height,
        }
    }

    /// An invisible, zero-sized asset.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            handle: None,
            width: 0,
            height: 0,
        }
    }
}

/// Supplies drawable assets for tile types.
///
/// Implemented by the rendering layer. The generator never inspects the
/// handle; it only copies it into each [`Tile`].
pub trait TileFactory {
    /// Opaque drawable handle.
    type Handle: Clone;

    /// Asset to use for tiles of `kind`.
    fn asset(&self, kind: TileType) -> TileAsset<Self::Handle>;
}

impl<F: TileFactory + ?Sized> TileFactory for &F {
    type Handle = F::Handle;

    fn asset(&self, kind: TileType) -> TileAsset<Self::Handle> {
        (**self).asset(kind)
    }
}

/// Tile factory with no rendering backend.
///
/// Every visible tile is an `edge x edge` square whose handle is its own type;
/// [`TileType::Empty`] gets no handle and no size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlessTiles {
    edge: u32,
}

impl HeadlessTiles {
    /// Creates a headless factory drawing `edge`-pixel squares.
    #[must_use]
    pub const fn new(edge: u32) -> Self {
        Self { edge }
    }
}

impl TileFactory for HeadlessTiles {
    type Handle = TileType;

    fn asset(&self, kind: TileType) -> TileAsset<TileType> {
        match kind {
            TileType::Empty => TileAsset::none(),
            _ => TileAsset::new(kind, self.edge, self.edge),
        }
    }
}

/// A placed tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile<H> {
    /// Tile type.
    pub kind: TileType,
    /// Drawable handle from the tile factory.
    pub handle: Option<H>,
    /// Draw width in pixels.
    pub width: u32,
    /// Draw height in pixels.
    pub height: u32,
    /// Draw rotation.
    pub rotation: Rotation,
    /// World X position in pixels.
    pub x: u32,
    /// World Y position in pixels.
    pub y: u32,
}

impl<H> Tile<H> {
    /// Places a tile of `kind` at pixel position `(x, y)`.
    #[must_use]
    pub fn new(kind: TileType, asset: TileAsset<H>, rotation: Rotation, x: u32, y: u32) -> Self {
        Self {
            kind,
            handle: asset.handle,
            width: asset.width,
            height: asset.height,
            rotation,
            x,
            y,
        }
    }

    /// Rotation angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        f64::from(self.rotation.degrees())
    }
}
