pub mod app_loop;
pub mod config;
pub mod sprite_sheet;

pub const APP_NAME: &str = "tilecrawl";

/// Environment variable that points the game at a different asset directory.
pub const ASSETS_ENV_VAR: &str = "TILECRAWL_ASSETS";
