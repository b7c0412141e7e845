//! Shared map fixtures for unit tests across the crate.

use crate::map::GameMap;
use crate::world::{World, WorldConfig};

/// 3×3 room with a pillar in the middle, player bottom-left, monster
/// bottom-right.
pub(crate) const EXAMPLE_MAP: &str = "3 3\n\n0 0 0\n0 1 0\nP 0 M\n";

pub(crate) fn example_world() -> World {
    World::new(&parse(EXAMPLE_MAP), WorldConfig::default())
}

/// Open 12×12 floor with the player at (1, 1) and a monster in the far corner.
pub(crate) fn open_field_world(config: WorldConfig) -> World {
    World::new(&parse(&open_field_text(12, 12)), config)
}

pub(crate) fn open_field_text(width: usize, height: usize) -> String {
    let mut text = format!("{width} {height}\n\n");
    for y in 0..height {
        let row: Vec<&str> = (0..width)
            .map(|x| match (x, y) {
                (1, 1) => "P",
                (x, y) if x == width - 1 && y == height - 1 => "M",
                _ => "0",
            })
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    text
}

pub(crate) fn parse(text: &str) -> GameMap {
    GameMap::parse(text).expect("fixture map should parse")
}
