//! # MEXIS Procedural Generation
//!
//! Deterministic lake-and-dirt terrain for a 2D tile world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same `(width, height, seed)` always produces the same canvas
//! 2. **Explicit randomness**: Every pass takes its own [`WorldRng`]
//! 3. **Renderer-agnostic**: Drawable assets come in through [`TileFactory`]
//!
//! ## Core Components
//!
//! - `TerrainGenerator`: density grid → blob seeds → stamped water discs → [`Canvas`]
//! - `Materializer`: canvas symbols → water/dirt [`Tile`]s in a [`WorldMap`]
//! - `ResourceTable`: ratio-driven resource overlay on dirt cells
//!
//! ## Example
//!
//! ```rust
//! use mexis_procedural::{
//!     generate, materialize, HeadlessTiles, TileType, WorldRng, WorldSeed,
//! };
//!
//! let canvas = generate(25, 20, 42).unwrap();
//! let mut rng = WorldRng::from_seed(WorldSeed::new(42).derive(1));
//! let ground = materialize(&canvas, 32, &HeadlessTiles::new(32), &mut rng);
//!
//! assert_eq!(ground.width(), 25);
//! assert_eq!(ground.height(), 20);
//! assert_eq!(
//!     ground.count(TileType::Water) + ground.count(TileType::Dirt),
//!     25 * 20
//! );
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod generator;
pub mod materializer;
pub mod resource;
pub mod seed;
pub mod tile;

pub use canvas::{Canvas, Symbol};
pub use config::GeneratorConfig;
pub use error::{WorldGenError, WorldGenResult};
pub use generator::{generate, TerrainGenerator};
pub use materializer::{materialize, Materializer, WorldMap, GROUND_MAP_NAME};
pub use resource::{ResourceEntry, ResourceTable, RESOURCE_MAP_NAME};
pub use seed::{streams, WorldRng, WorldSeed};
pub use tile::{HeadlessTiles, Rotation, Tile, TileAsset, TileFactory, TileType};
