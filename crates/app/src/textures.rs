//! GPU textures built from the CPU-side sprite sheets. Needs a live window.

use game_core::{SpriteRef, Tint};
use macroquad::prelude::{FilterMode, Texture2D};
use std::collections::HashMap;
use tilecrawl::sprite_sheet::SpriteSheet;

const ENTITY_TINTS: [Tint; 2] = [Tint::Red, Tint::Dark];

pub struct TextureGrid {
    cells: Vec<Vec<Texture2D>>,
}

impl TextureGrid {
    pub fn from_sheet(sheet: &SpriteSheet) -> Self {
        let cells = (0..sheet.rows())
            .map(|row| {
                (0..sheet.cols())
                    .filter_map(|col| sheet.cell(SpriteRef::new(row, col)))
                    .map(|image| {
                        let texture = Texture2D::from_image(image);
                        texture.set_filter(FilterMode::Nearest);
                        texture
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, sprite: SpriteRef) -> Option<&Texture2D> {
        self.cells.get(sprite.row).and_then(|row| row.get(sprite.col))
    }
}

pub struct SpriteTextures {
    tiles: TextureGrid,
    entities: HashMap<Tint, TextureGrid>,
}

impl SpriteTextures {
    /// Entity frames are recolored once per tint here rather than per frame.
    pub fn new(tile_sheet: &SpriteSheet, entity_sheet: &SpriteSheet) -> Self {
        let entities = ENTITY_TINTS
            .into_iter()
            .map(|tint| (tint, TextureGrid::from_sheet(&entity_sheet.recolored(tint))))
            .collect();
        Self { tiles: TextureGrid::from_sheet(tile_sheet), entities }
    }

    pub fn tile(&self, sprite: SpriteRef) -> Option<&Texture2D> {
        self.tiles.get(sprite)
    }

    pub fn entity(&self, tint: Tint, sprite: SpriteRef) -> Option<&Texture2D> {
        self.entities.get(&tint).and_then(|grid| grid.get(sprite))
    }
}
