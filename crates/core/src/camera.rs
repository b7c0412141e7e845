//! Viewport placement over the tile grid.

use crate::types::Pos;

/// Visible window in grid coordinates. `cols`/`rows` never exceed the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: usize,
    pub y: usize,
    pub cols: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) >= self.x
            && (pos.y as usize) >= self.y
            && (pos.x as usize) < self.x + self.cols
            && (pos.y as usize) < self.y + self.rows
    }

    /// Grid positions inside the viewport, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.y..self.y + self.rows).flat_map(move |y| {
            (self.x..self.x + self.cols).map(move |x| Pos::new(x as i32, y as i32))
        })
    }
}

/// Centres a `cols × rows` window on `focus`, clamped so it never leaves the
/// `map_width × map_height` grid.
pub fn center_on(
    focus: Pos,
    map_width: usize,
    map_height: usize,
    cols: usize,
    rows: usize,
) -> Viewport {
    let cols = cols.min(map_width);
    let rows = rows.min(map_height);
    Viewport {
        x: clamped_origin(focus.x, cols, map_width),
        y: clamped_origin(focus.y, rows, map_height),
        cols,
        rows,
    }
}

fn clamped_origin(focus: i32, span: usize, extent: usize) -> usize {
    let max_origin = extent.saturating_sub(span);
    let wanted = (i64::from(focus) - (span / 2) as i64).max(0) as usize;
    wanted.min(max_origin)
}
