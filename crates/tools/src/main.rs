use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_core::{Facing, GameMap, Pos, TileCode};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Asset helpers for tilecrawl", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a map file and print its size, spawns and layout
    CheckMap {
        /// Path to the text map
        path: PathBuf,
    },
    /// Write flat-colored tile and entity sheets for running without art
    PlaceholderSprites {
        /// Directory that receives tiles.png and entities.png
        #[arg(short, long)]
        out: PathBuf,
        /// Edge length of one sprite cell in pixels
        #[arg(long, default_value_t = 128)]
        cell_size: u32,
    },
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::CheckMap { path } => {
            let map = GameMap::load(&path)
                .with_context(|| format!("Map check failed: {}", path.display()))?;
            for line in map_report(&map) {
                println!("{line}");
            }
        }
        Command::PlaceholderSprites { out, cell_size } => {
            for path in write_placeholder_sheets(&out, cell_size)? {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn map_report(map: &GameMap) -> Vec<String> {
    let mut lines = vec![
        format!("Size: {}x{}", map.width(), map.height()),
        format!("Player spawn: {}", describe(map.player_spawn())),
        format!("Monster spawns: {}", map.monster_spawns().len()),
    ];
    lines.extend(map.monster_spawns().iter().map(|pos| format!("  {}", describe(*pos))));

    for y in 0..map.height() {
        let row: String = (0..map.width())
            .map(|x| map.code_at(Pos::new(x as i32, y as i32)).map_or('?', TileCode::as_char))
            .collect();
        lines.push(row);
    }
    lines
}

fn describe(pos: Pos) -> String {
    format!("({}, {})", pos.x, pos.y)
}

const FLOOR_COLOR: Rgba<u8> = Rgba([96, 88, 72, 255]);
const WALL_COLOR: Rgba<u8> = Rgba([48, 48, 56, 255]);
const BODY_COLOR: Rgba<u8> = Rgba([220, 220, 220, 255]);
const MARK_COLOR: Rgba<u8> = Rgba([40, 40, 40, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

const MIN_CELL_SIZE: u32 = 4;
/// Keeps the widest sheet, four cells across, well inside `u32` pixels.
const MAX_CELL_SIZE: u32 = 4096;

fn write_placeholder_sheets(out: &Path, cell_size: u32) -> Result<Vec<PathBuf>> {
    anyhow::ensure!(
        (MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size),
        "cell size must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE} pixels, got {cell_size}"
    );
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let tiles_path = out.join("tiles.png");
    tile_sheet(cell_size)
        .save(&tiles_path)
        .with_context(|| format!("Failed to write {}", tiles_path.display()))?;

    let entities_path = out.join("entities.png");
    entity_sheet(cell_size)
        .save(&entities_path)
        .with_context(|| format!("Failed to write {}", entities_path.display()))?;

    Ok(vec![tiles_path, entities_path])
}

/// One row: floor, then wall.
fn tile_sheet(cell: u32) -> RgbaImage {
    RgbaImage::from_fn(cell * 2, cell, |x, _| if x < cell { FLOOR_COLOR } else { WALL_COLOR })
}

/// One row of facings in `Facing` order. Each frame is a light body on a
/// transparent cell with a dark mark on the side it faces.
fn entity_sheet(cell: u32) -> RgbaImage {
    let margin = cell / 4;
    let mark = cell / 8;
    RgbaImage::from_fn(cell * Facing::ALL.len() as u32, cell, |x, y| {
        let facing = Facing::ALL[(x / cell) as usize];
        let (cx, cy) = (x % cell, y);
        let inside = (margin..cell - margin).contains(&cx) && (margin..cell - margin).contains(&cy);
        if !inside {
            return CLEAR;
        }
        let marked = match facing {
            Facing::Left => cx < margin + mark,
            Facing::Right => cx >= cell - margin - mark,
            Facing::Back => cy < margin + mark,
            Facing::Front => cy >= cell - margin - mark,
        };
        if marked { MARK_COLOR } else { BODY_COLOR }
    })
}
