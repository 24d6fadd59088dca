//! # Materialization Tests
//!
//! Verifies canvas-to-tile mapping and the resource overlay end to end.

use mexis_procedural::{
    generate, materialize, streams, Canvas, HeadlessTiles, ResourceTable, Rotation, Symbol,
    TileAsset, TileFactory, TileType, WorldRng, WorldSeed,
};

/// Factory that tags each asset with a per-type texture path.
struct PathTiles;

impl TileFactory for PathTiles {
    type Handle = &'static str;

    fn asset(&self, kind: TileType) -> TileAsset<&'static str> {
        match kind {
            TileType::Dirt => TileAsset::new("ground/dirt.png", 32, 32),
            TileType::Water => TileAsset::new("ground/water.png", 32, 32),
            TileType::Grass => TileAsset::new("object/grass.png", 32, 32),
            TileType::Tree => TileAsset::new("object/tree.png", 32, 64),
            TileType::Stone => TileAsset::new("object/stone.png", 32, 32),
            TileType::Iron => TileAsset::new("object/iron.png", 32, 32),
            TileType::Empty => TileAsset::none(),
        }
    }
}

fn rotation_rng(seed: u64) -> WorldRng {
    WorldRng::from_seed(WorldSeed::new(seed).derive(streams::ROTATION))
}

/// Test: All-blank 3x3 canvas gives nine dirt tiles on a 32px lattice.
#[test]
fn test_blank_canvas_positions() {
    let canvas = Canvas::blank(3, 3).unwrap();
    let map = materialize(&canvas, 32, &HeadlessTiles::new(32), &mut rotation_rng(1));

    assert_eq!(map.count(TileType::Dirt), 9);
    let positions: Vec<(u32, u32)> = map
        .tiles()
        .as_slice()
        .iter()
        .map(|tile| (tile.x, tile.y))
        .collect();
    assert_eq!(
        positions,
        vec![
            (0, 0),
            (32, 0),
            (64, 0),
            (0, 32),
            (32, 32),
            (64, 32),
            (0, 64),
            (32, 64),
            (64, 64),
        ]
    );
}

/// Test: One tile per cell; water exactly where the canvas holds water symbols.
#[test]
fn test_mapping_totality() {
    for seed in 0..20 {
        let canvas = generate(30, 20, seed).unwrap();
        let map = materialize(&canvas, 32, &PathTiles, &mut rotation_rng(seed));

        assert_eq!((map.width(), map.height()), (30, 20));
        assert_eq!(map.tiles().len(), 30 * 20);
        for (x, y, tile) in map.tiles().cells() {
            let symbol = canvas.get(x, y).unwrap();
            let expected = if symbol.is_water() {
                TileType::Water
            } else {
                TileType::Dirt
            };
            assert_eq!(tile.kind, expected, "seed {seed} at ({x}, {y})");
        }
    }
}

/// Test: Hand-built centers still become water.
#[test]
fn test_center_maps_to_water() {
    let canvas: Canvas = ".".parse().unwrap();
    assert_eq!(canvas.get(0, 0), Some(Symbol::Center));
    let map = materialize(&canvas, 32, &PathTiles, &mut rotation_rng(0));
    let tile = map.tile(0, 0).unwrap();
    assert_eq!(tile.kind, TileType::Water);
    assert_eq!(tile.handle, Some("ground/water.png"));
}

/// Test: Factory assets are recorded on each tile.
#[test]
fn test_factory_assets_recorded() {
    let canvas: Canvas = "o ".parse().unwrap();
    let map = materialize(&canvas, 16, &PathTiles, &mut rotation_rng(0));
    let dirt = map.tile(1, 0).unwrap();
    assert_eq!(dirt.handle, Some("ground/dirt.png"));
    assert_eq!((dirt.width, dirt.height), (32, 32));
    assert_eq!((dirt.x, dirt.y), (16, 0));
}

/// Test: Dirt rotations use every quarter turn on a large map.
#[test]
fn test_dirt_rotations_vary() {
    let canvas = Canvas::blank(20, 20).unwrap();
    let map = materialize(&canvas, 32, &PathTiles, &mut rotation_rng(3));
    for rotation in Rotation::ALL {
        assert!(
            map.tiles().count(|t| t.rotation == rotation) > 0,
            "rotation {rotation:?} never drawn"
        );
    }
}

/// Test: Debug dump prints labels row by row.
#[test]
fn test_print_map_format() {
    let canvas: Canvas = "o o\n   ".parse().unwrap();
    let map = materialize(&canvas, 32, &PathTiles, &mut rotation_rng(0));
    assert_eq!(map.to_string(), "water dirt water\ndirt dirt dirt\n");
}

/// Test: Resource overlay on generated terrain respects the ratios roughly.
#[test]
fn test_resource_overlay_distribution() {
    let canvas = generate(100, 100, 8).unwrap();
    let ground = materialize(&canvas, 32, &PathTiles, &mut rotation_rng(8));
    let table = ResourceTable::default();
    let mut rng = WorldRng::from_seed(WorldSeed::new(8).derive(streams::RESOURCES));
    let resources = table.overlay(&ground, &PathTiles, &mut rng);

    assert_eq!(resources.count(TileType::Water), ground.count(TileType::Water));

    let dirt_cells = ground.count(TileType::Dirt) as f64;
    let grass_share = resources.count(TileType::Grass) as f64 / dirt_cells;
    let empty_share = resources.count(TileType::Empty) as f64 / dirt_cells;
    println!("grass {grass_share:.3}, empty {empty_share:.3}");
    assert!((grass_share - 0.35).abs() < 0.05);
    assert!((empty_share - 0.20).abs() < 0.05);

    // Trees keep their own asset size.
    if let Some(tree) = resources
        .tiles()
        .as_slice()
        .iter()
        .find(|t| t.kind == TileType::Tree)
    {
        assert_eq!((tree.width, tree.height), (32, 64));
    }
}
