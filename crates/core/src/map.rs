//! Text map loading.
//!
//! ```text
//! 5 3
//!
//! 1 1 1 1 1
//! 1 P 0 M 1
//! 1 1 1 1 1
//! ```
//!
//! The header gives `width height`, the second line is ignored, and each of
//! the following `height` lines holds `width` single-character codes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Pos, TileKind};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("map has no header line")]
    MissingHeader,
    #[error("map header must be two positive integers `width height`, got {0:?}")]
    BadHeader(String),
    #[error("map declares {expected} rows but has {found}")]
    RowCount { expected: usize, found: usize },
    #[error("map row {row} has {found} columns, expected {expected}")]
    ColumnCount { row: usize, expected: usize, found: usize },
    #[error("map cell ({x}, {y}) holds {token:?}, expected a single character")]
    BadToken { x: usize, y: usize, token: String },
    #[error("map cell ({x}, {y}) holds unknown code {code:?}")]
    UnknownCode { x: usize, y: usize, code: char },
    #[error("map has no player spawn `P`")]
    MissingPlayerSpawn,
    #[error("map has more than one player spawn: {first:?} and {second:?}")]
    DuplicatePlayerSpawn { first: Pos, second: Pos },
    #[error("map has no monster spawn `M`")]
    MissingMonsterSpawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileCode {
    Floor,
    Wall,
    PlayerSpawn,
    MonsterSpawn,
}

impl TileCode {
    pub fn from_char(code: char) -> Option<Self> {
        match code {
            '0' => Some(TileCode::Floor),
            '1' => Some(TileCode::Wall),
            'P' => Some(TileCode::PlayerSpawn),
            'M' => Some(TileCode::MonsterSpawn),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TileCode::Floor => '0',
            TileCode::Wall => '1',
            TileCode::PlayerSpawn => 'P',
            TileCode::MonsterSpawn => 'M',
        }
    }

    /// Spawn markers render as open floor.
    pub fn tile_kind(self) -> TileKind {
        match self {
            TileCode::Wall => TileKind::Wall,
            TileCode::Floor | TileCode::PlayerSpawn | TileCode::MonsterSpawn => TileKind::Floor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMap {
    width: usize,
    height: usize,
    codes: Vec<TileCode>,
    player_spawn: Pos,
    monster_spawns: Vec<Pos>,
}

impl GameMap {
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)
            .map_err(|source| MapError::Io { path: path.to_path_buf(), source })?;
        let map = Self::parse(&text)?;
        log::info!(
            "Loaded {}x{} map from {} ({} monster spawns)",
            map.width,
            map.height,
            path.display(),
            map.monster_spawns.len()
        );
        Ok(map)
    }

    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(MapError::MissingHeader)?;
        let (width, height) = parse_header(header)?;
        // Separator line.
        lines.next();

        let mut rows: Vec<&str> = lines.collect();
        while rows.last().is_some_and(|line| line.trim().is_empty()) {
            rows.pop();
        }
        if rows.len() != height {
            return Err(MapError::RowCount { expected: height, found: rows.len() });
        }

        // Grows with validated rows only.
        let mut codes = Vec::new();
        for (y, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != width {
                return Err(MapError::ColumnCount { row: y, expected: width, found: tokens.len() });
            }
            for (x, token) in tokens.into_iter().enumerate() {
                let mut chars = token.chars();
                let (Some(code), None) = (chars.next(), chars.next()) else {
                    return Err(MapError::BadToken { x, y, token: token.to_string() });
                };
                let code = TileCode::from_char(code).ok_or(MapError::UnknownCode { x, y, code })?;
                codes.push(code);
            }
        }

        let mut player_spawn = None;
        let mut monster_spawns = Vec::new();
        for (index, code) in codes.iter().enumerate() {
            let pos = Pos::new((index % width) as i32, (index / width) as i32);
            match code {
                TileCode::PlayerSpawn => {
                    if let Some(first) = player_spawn {
                        return Err(MapError::DuplicatePlayerSpawn { first, second: pos });
                    }
                    player_spawn = Some(pos);
                }
                TileCode::MonsterSpawn => monster_spawns.push(pos),
                TileCode::Floor | TileCode::Wall => {}
            }
        }
        let player_spawn = player_spawn.ok_or(MapError::MissingPlayerSpawn)?;
        if monster_spawns.is_empty() {
            return Err(MapError::MissingMonsterSpawn);
        }

        Ok(Self { width, height, codes, player_spawn, monster_spawns })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn code_at(&self, pos: Pos) -> Option<TileCode> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.codes[(pos.y as usize) * self.width + (pos.x as usize)])
    }

    pub fn tile_kind_at(&self, pos: Pos) -> Option<TileKind> {
        self.code_at(pos).map(TileCode::tile_kind)
    }

    pub fn player_spawn(&self) -> Pos {
        self.player_spawn
    }

    /// Monster spawn cells in row-major order.
    pub fn monster_spawns(&self) -> &[Pos] {
        &self.monster_spawns
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), MapError> {
    let bad_header = || MapError::BadHeader(line.to_string());
    let mut parts = line.split_whitespace();
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad_header());
    };
    let width = width.parse::<usize>().map_err(|_| bad_header())?;
    let height = height.parse::<usize>().map_err(|_| bad_header())?;
    if width == 0 || height == 0 || width.checked_mul(height).is_none() {
        return Err(bad_header());
    }
    Ok((width, height))
}
