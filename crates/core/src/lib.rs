pub mod actor;
pub mod camera;
pub mod content;
pub mod game;
pub mod map;
pub mod menu;
pub mod screen;
pub mod tile;
pub mod types;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use actor::{Actor, SpriteSet};
pub use camera::Viewport;
pub use content::Tint;
pub use game::Game;
pub use map::{GameMap, MapError, TileCode};
pub use menu::{Menu, MenuAction, MenuItem};
pub use screen::{Screen, ScreenAction};
pub use tile::Tile;
pub use types::*;
pub use world::{HudItem, HudStat, MoveOutcome, VisibleCell, World, WorldConfig, WorldEvent};
