//! # mapgen
//!
//! Generates a world and prints it to stdout.
//!
//! ```bash
//! mapgen --seed 42 --canvas --resources
//! mapgen --config world.toml --width 80 --height 40
//! ```
//!
//! Flags override the config file, which overrides the built-in defaults.
//! Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mexis::{AppResult, TextureCatalog, World, WorldBuilder, WorldConfig};
use mexis_procedural::HeadlessTiles;
use tracing::{error, Level};

/// Generate a MEXIS tile world and print it.
#[derive(Parser, Debug)]
#[command(name = "mapgen", version)]
struct Cli {
    /// World config file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width in tiles.
    #[arg(long)]
    width: Option<usize>,

    /// World height in tiles.
    #[arg(long)]
    height: Option<usize>,

    /// World seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tile edge length in pixels.
    #[arg(long)]
    tile_edge: Option<u32>,

    /// Asset root; textures are loaded from here instead of running headless.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the raw terrain canvas.
    #[arg(long)]
    canvas: bool,

    /// Print the resource map.
    #[arg(long)]
    resources: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn world_config(&self) -> AppResult<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::load(path)?,
            None => WorldConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(tile_edge) = self.tile_edge {
            config.tile_edge = tile_edge;
        }
        if let Some(assets) = &self.assets {
            config.assets = Some(assets.clone());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "mapgen failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = cli.world_config()?;
    let builder = WorldBuilder::from_config(&config)?;

    match &config.assets {
        Some(root) => {
            let catalog = TextureCatalog::load(root)?;
            print_world(&builder.build(&catalog)?, cli);
        }
        None => {
            let tiles = HeadlessTiles::new(config.tile_edge);
            print_world(&builder.build(&tiles)?, cli);
        }
    }
    Ok(())
}

fn print_world<H>(world: &World<H>, cli: &Cli) {
    println!("# seed {}", world.seed.value());

    if cli.canvas {
        println!("# canvas");
        print!("{}", world.canvas);
    }

    println!("# {}", world.ground.name());
    print!("{}", world.ground);

    if cli.resources {
        match &world.resources {
            Some(resources) => {
                println!("# {}", resources.name());
                print!("{resources}");
            }
            None => println!("# no resource table configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_config(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mexis_mapgen_{name}_{}.toml", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mapgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let config = parse(&[]).world_config().unwrap();
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = write_config(
            "override",
            "width = 40\nheight = 30\nseed = 7\ntile_edge = 16\n",
        );
        let path_arg = path.to_string_lossy().into_owned();

        let config = parse(&["--config", &path_arg, "--width", "12", "--seed", "99"])
            .world_config()
            .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.seed, 99);
        // Unset flags keep the file's values.
        assert_eq!(config.height, 30);
        assert_eq!(config.tile_edge, 16);
        assert_eq!(config.assets, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let path = write_config("file", "height = 9\n");
        let path_arg = path.to_string_lossy().into_owned();

        let config = parse(&["-c", &path_arg, "--assets", "textures"])
            .world_config()
            .unwrap();
        assert_eq!(config.height, 9);
        assert_eq!(config.width, WorldConfig::default().width);
        assert_eq!(config.assets.as_deref(), Some(Path::new("textures")));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/mexis/world.toml"]);
        assert!(matches!(
            cli.world_config(),
            Err(mexis::AppError::ConfigRead { .. })
        ));
    }
}
