//! Sprite-sheet loading and slicing. Everything here works on CPU-side
//! images; textures are created later, once a window exists.

use game_core::{SpriteRef, Tint};
use macroquad::prelude::{Image, Rect};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("sprite cells must be at least 1x1, got {width}x{height}")]
    CellSize { width: u32, height: u32 },
}

/// Fixed-size cells cut from one image, indexed `[row][col]`. Partial cells
/// along the right and bottom edges are dropped.
#[derive(Clone)]
pub struct SpriteSheet {
    cell_width: u32,
    cell_height: u32,
    cells: Vec<Vec<Image>>,
}

impl SpriteSheet {
    pub fn load(path: &Path, cell_width: u32, cell_height: u32) -> Result<Self, AssetError> {
        let bytes =
            fs::read(path).map_err(|source| AssetError::Read { path: path.to_path_buf(), source })?;
        let image = Image::from_file_with_format(&bytes, None).map_err(|err| {
            AssetError::Decode { path: path.to_path_buf(), message: format!("{err:?}") }
        })?;
        let sheet = Self::from_image(&image, cell_width, cell_height)?;
        log::info!(
            "Sliced {} into {}x{} cells of {}x{}",
            path.display(),
            sheet.cols(),
            sheet.rows(),
            cell_width,
            cell_height
        );
        Ok(sheet)
    }

    pub fn from_image(image: &Image, cell_width: u32, cell_height: u32) -> Result<Self, AssetError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(AssetError::CellSize { width: cell_width, height: cell_height });
        }
        let cols = image.width() / cell_width as usize;
        let rows = image.height() / cell_height as usize;

        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        image.sub_image(Rect::new(
                            (col as u32 * cell_width) as f32,
                            (row as u32 * cell_height) as f32,
                            cell_width as f32,
                            cell_height as f32,
                        ))
                    })
                    .collect()
            })
            .collect();

        Ok(Self { cell_width, cell_height, cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn cell(&self, sprite: SpriteRef) -> Option<&Image> {
        self.cells.get(sprite.row).and_then(|row| row.get(sprite.col))
    }

    /// Copy of the sheet with `tint` applied to every cell.
    pub fn recolored(&self, tint: Tint) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| recolor_image(cell, tint)).collect())
            .collect();
        Self { cell_width: self.cell_width, cell_height: self.cell_height, cells }
    }
}

pub fn recolor_image(image: &Image, tint: Tint) -> Image {
    let mut recolored = image.clone();
    for pixel in recolored.bytes.chunks_exact_mut(4) {
        let mapped = tint.apply([pixel[0], pixel[1], pixel[2], pixel[3]]);
        pixel.copy_from_slice(&mapped);
    }
    recolored
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{Color, WHITE};

    fn checker(width: u16, height: u16) -> Image {
        let mut image = Image::gen_image_color(width, height, WHITE);
        image.set_pixel(0, 0, Color::from_rgba(0, 255, 0, 255));
        image
    }

    #[test]
    fn slices_full_cells_row_major() {
        let sheet = SpriteSheet::from_image(&checker(8, 4), 4, 2).expect("slice");
        assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
        let first = sheet.cell(SpriteRef::new(0, 0)).expect("first cell");
        assert_eq!((first.width(), first.height()), (4, 2));
        assert_eq!(first.get_pixel(0, 0), Color::from_rgba(0, 255, 0, 255));
        assert_eq!(sheet.cell(SpriteRef::new(1, 1)).map(Image::width), Some(4));
    }

    #[test]
    fn truncates_partial_trailing_cells() {
        let sheet = SpriteSheet::from_image(&checker(10, 7), 4, 3).expect("slice");
        assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
        assert!(sheet.cell(SpriteRef::new(0, 2)).is_none());
        assert!(sheet.cell(SpriteRef::new(2, 0)).is_none());
    }

    #[test]
    fn image_smaller_than_a_cell_yields_empty_sheet() {
        let sheet = SpriteSheet::from_image(&checker(3, 3), 4, 4).expect("slice");
        assert_eq!((sheet.rows(), sheet.cols()), (0, 0));
    }

    #[test]
    fn rejects_zero_cell_size() {
        let result = SpriteSheet::from_image(&checker(4, 4), 0, 4);
        assert!(matches!(result, Err(AssetError::CellSize { width: 0, height: 4 })));
    }

    #[test]
    fn recolor_applies_tint_to_every_cell() {
        let sheet = SpriteSheet::from_image(&checker(4, 4), 2, 2).expect("slice");
        let dark = sheet.recolored(Tint::Dark);
        let cell = dark.cell(SpriteRef::new(1, 1)).expect("cell");
        assert_eq!(cell.bytes[..4], [127, 127, 127, 255]);
        assert_eq!(dark.cell_size(), (2, 2));
    }

    #[test]
    fn load_reports_missing_and_undecodable_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = SpriteSheet::load(&dir.path().join("none.png"), 128, 128);
        assert!(matches!(missing, Err(AssetError::Read { .. })));

        let garbage = dir.path().join("garbage.png");
        fs::write(&garbage, b"not an image").expect("write");
        let undecodable = SpriteSheet::load(&garbage, 128, 128);
        assert!(matches!(undecodable, Err(AssetError::Decode { .. })));
    }
}
