//! # Application Error Types

use std::io;
use std::path::PathBuf;

use mexis_procedural::WorldGenError;
use thiserror::Error;

use crate::assets::AssetError;

/// Errors surfaced by world assembly and the `mapgen` tool.
#[derive(Error, Debug)]
pub enum AppError {
    /// Generation rejected its inputs.
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),

    /// A texture could not be loaded.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The config file could not be read.
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        /// File that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for [`crate::WorldConfig`].
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
