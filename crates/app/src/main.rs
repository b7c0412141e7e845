mod frame_input;
mod render;
mod textures;
mod window_config;

use anyhow::{Context, Result, anyhow};
use env_logger::Env;
use frame_input::capture_frame_input;
use game_core::{Game, GameMap};
use macroquad::prelude::{BLACK, clear_background, get_frame_time, next_frame};
use render::{RenderStyle, draw_game};
use std::env;
use std::process;
use textures::SpriteTextures;
use tilecrawl::ASSETS_ENV_VAR;
use tilecrawl::app_loop::{AppMode, AppState};
use tilecrawl::config::{AppConfig, parse_launch_args, resolve_config};
use tilecrawl::sprite_sheet::SpriteSheet;
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = parse_launch_args(&args).map_err(|err| anyhow!(err))?;
    let assets_override = env::var(ASSETS_ENV_VAR).ok();
    let default_config = AppConfig::get_default_path();
    let config =
        resolve_config(&options, default_config.as_deref(), assets_override.as_deref())
            .context("failed to load configuration")?;

    let map_path = config.map_path();
    let map = GameMap::load(&map_path)
        .with_context(|| format!("failed to load map {}", map_path.display()))?;
    let cell = config.sprite_cell_size;
    let tile_sheet = SpriteSheet::load(&config.tile_sheet_path(), cell, cell)?;
    let entity_sheet = SpriteSheet::load(&config.entity_sheet_path(), cell, cell)?;
    let textures = SpriteTextures::new(&tile_sheet, &entity_sheet);
    let style = RenderStyle { tile_size: config.tile_draw_size, font_size: config.hud_font_size };

    let mut game = Game::new(map, config.world_config());
    let mut app = AppState::new();
    log::info!("Starting on the {} screen", game.screen().name());

    loop {
        let input = capture_frame_input();
        app.tick(&mut game, &input.keys_pressed, &input.keys_down, get_frame_time());
        if app.mode == AppMode::Stopped {
            break;
        }

        clear_background(BLACK);
        draw_game(&game, &textures, style);
        next_frame().await;
    }

    log::info!("Exiting");
    Ok(())
}
