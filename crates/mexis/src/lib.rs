//! # MEXIS
//!
//! World assembly on top of [`mexis_procedural`]: configuration, the texture
//! catalog, and the builder that turns one seed into a ground map and a
//! resource map.
//!
//! ## Example
//!
//! ```rust
//! use mexis::{WorldBuilder, WorldConfig};
//! use mexis_procedural::{HeadlessTiles, TileType};
//!
//! let config = WorldConfig { seed: 42, ..WorldConfig::default() };
//! let builder = WorldBuilder::from_config(&config).unwrap();
//! let world = builder.build(&HeadlessTiles::new(config.tile_edge)).unwrap();
//!
//! let resources = world.resources.unwrap();
//! assert_eq!(resources.count(TileType::Water), world.ground.count(TileType::Water));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod world;

pub use assets::{texture_path, AssetError, TextureCatalog, TextureHandle};
pub use config::WorldConfig;
pub use error::{AppError, AppResult};
pub use world::{World, WorldBuilder};
