//! Rendering for the active screen: tile window, actors, HUD and menus.

use crate::textures::SpriteTextures;
use game_core::{Game, Menu, Screen, SpriteRef, Tint, VisibleCell, World};
use macroquad::prelude::*;

const TEXT_PAD_X: f32 = 12.0;
const TEXT_PAD_Y: f32 = 8.0;
const MENU_LINE_STEP: f32 = 1.4;
const MENU_CURSOR: &str = "> ";
const MENU_INDENT: &str = "  ";
const HUD_COLOR: Color = WHITE;
const MISSING_SPRITE_COLOR: Color = MAGENTA;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub tile_size: f32,
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpriteSource {
    Tile(SpriteRef),
    Entity(Tint, SpriteRef),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SpriteDraw {
    x: f32,
    y: f32,
    source: SpriteSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct MenuLine {
    text: String,
    highlighted: bool,
}

pub fn draw_game(game: &Game, textures: &SpriteTextures, style: RenderStyle) {
    match game.screen() {
        Screen::MainMenu(menu) | Screen::Credits(menu) => draw_menu(menu, style),
        Screen::World(world) => draw_world(world, textures, style),
    }
}

fn draw_world(world: &World, textures: &SpriteTextures, style: RenderStyle) {
    for draw in tile_draw_list(world, style.tile_size) {
        let texture = match draw.source {
            SpriteSource::Tile(sprite) => textures.tile(sprite),
            SpriteSource::Entity(tint, sprite) => textures.entity(tint, sprite),
        };
        match texture {
            Some(texture) => draw_texture_ex(
                texture,
                draw.x,
                draw.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(style.tile_size, style.tile_size)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle_lines(
                draw.x,
                draw.y,
                style.tile_size,
                style.tile_size,
                2.0,
                MISSING_SPRITE_COLOR,
            ),
        }
    }

    let lines = world.hud_lines();
    for (line, (x, y)) in lines.iter().zip(hud_line_positions(lines.len(), style.font_size)) {
        draw_text(line, x, y, style.font_size, HUD_COLOR);
    }
}

fn draw_menu(menu: &Menu, style: RenderStyle) {
    let step = style.font_size * MENU_LINE_STEP;
    let mut text_y = TEXT_PAD_Y + step;

    draw_text(&menu.title, TEXT_PAD_X, text_y, style.font_size * 1.5, YELLOW);
    text_y += step * 1.5;

    for line in menu_lines(menu) {
        let color = if line.highlighted { YELLOW } else { LIGHTGRAY };
        draw_text(&line.text, TEXT_PAD_X, text_y, style.font_size, color);
        text_y += step;
    }
}

fn cell_origin(cell: VisibleCell, tile_size: f32) -> (f32, f32) {
    (cell.col as f32 * tile_size, cell.row as f32 * tile_size)
}

/// Background first, then occupants in stacking order, each lifted by half a
/// tile so actors appear to stand on their cell.
fn tile_draw_list(world: &World, tile_size: f32) -> Vec<SpriteDraw> {
    let mut draws = Vec::new();
    for cell in world.visible_cells() {
        let Some(tile) = world.tile(cell.pos) else {
            continue;
        };
        let (x, y) = cell_origin(cell, tile_size);
        draws.push(SpriteDraw { x, y, source: SpriteSource::Tile(tile.sprite) });

        for actor in tile.occupants().iter().filter_map(|id| world.actor(*id)) {
            if let Some(sprite) = actor.sprite() {
                draws.push(SpriteDraw {
                    x,
                    y: y - tile_size / 2.0,
                    source: SpriteSource::Entity(actor.sprites.tint, sprite),
                });
            }
        }
    }
    draws
}

/// Text baselines for HUD lines stacked down from the top-left corner.
fn hud_line_positions(count: usize, font_size: f32) -> Vec<(f32, f32)> {
    (0..count).map(|index| (TEXT_PAD_X, TEXT_PAD_Y + font_size * (index as f32 + 1.0))).collect()
}

fn menu_lines(menu: &Menu) -> Vec<MenuLine> {
    let body = menu.body.iter().map(|text| MenuLine { text: text.clone(), highlighted: false });
    let items = menu.items().iter().enumerate().map(|(index, item)| {
        let highlighted = index == menu.selected();
        let prefix = if highlighted { MENU_CURSOR } else { MENU_INDENT };
        MenuLine { text: format!("{prefix}{}", item.label), highlighted }
    });
    body.chain(items).collect()
}
