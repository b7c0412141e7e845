//! Launch configuration: JSON settings file, command-line flags and the
//! asset-directory environment override.

use directories::ProjectDirs;
use game_core::WorldConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub format_version: u32,
    pub assets_dir: PathBuf,
    pub map_file: PathBuf,
    pub tile_sheet: PathBuf,
    pub entity_sheet: PathBuf,
    /// Edge length of one sprite-sheet cell, in source pixels.
    pub sprite_cell_size: u32,
    /// Edge length of one tile on screen, in window pixels.
    pub tile_draw_size: f32,
    pub viewport_cols: usize,
    pub viewport_rows: usize,
    pub hud_font_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format_version: 1,
            assets_dir: PathBuf::from("assets"),
            map_file: PathBuf::from("level.txt"),
            tile_sheet: PathBuf::from("tiles.png"),
            entity_sheet: PathBuf::from("entities.png"),
            sprite_cell_size: 128,
            tile_draw_size: 80.0,
            viewport_cols: 9,
            viewport_rows: 12,
            hud_font_size: 28.0,
        }
    }
}

impl AppConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("config.json");
            path
        })
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Relative file names resolve against `assets_dir`; absolute ones are
    /// used as-is.
    pub fn map_path(&self) -> PathBuf {
        self.assets_dir.join(&self.map_file)
    }

    pub fn tile_sheet_path(&self) -> PathBuf {
        self.assets_dir.join(&self.tile_sheet)
    }

    pub fn entity_sheet_path(&self) -> PathBuf {
        self.assets_dir.join(&self.entity_sheet)
    }

    pub fn world_config(&self) -> WorldConfig {
        WorldConfig { viewport_cols: self.viewport_cols, viewport_rows: self.viewport_rows }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub map_path: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
}

const FLAGS: [&str; 3] = ["--config", "--map", "--assets"];

/// Parses `--config`, `--map` and `--assets`, each given as `--flag value` or
/// `--flag=value`. `args[0]` is the program name.
pub fn parse_launch_args(args: &[String]) -> Result<LaunchOptions, String> {
    let mut options = LaunchOptions::default();
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, value) = if let Some((flag, value)) = argument.split_once('=') {
            (flag, value.to_string())
        } else if FLAGS.contains(&argument) {
            let Some(value) = args.get(index + 1) else {
                return Err(format!("missing value for {argument}"));
            };
            index += 1;
            (argument, value.clone())
        } else {
            return Err(format!("unknown argument '{argument}'"));
        };
        index += 1;

        let slot = match flag {
            "--config" => &mut options.config_path,
            "--map" => &mut options.map_path,
            "--assets" => &mut options.assets_dir,
            _ => return Err(format!("unknown argument '{argument}'")),
        };
        if slot.is_some() {
            return Err(format!("{flag} provided more than once"));
        }
        if value.is_empty() {
            return Err(format!("missing value for {flag}"));
        }
        *slot = Some(PathBuf::from(value));
    }

    Ok(options)
}

/// Builds the effective configuration. An explicit `--config` file must
/// exist; otherwise the per-user file is used when present, then built-in
/// defaults. Command-line paths win over the environment override, which
/// wins over the file.
pub fn resolve_config(
    options: &LaunchOptions,
    default_path: Option<&Path>,
    assets_override: Option<&str>,
) -> io::Result<AppConfig> {
    let mut config = match (&options.config_path, default_path) {
        (Some(path), _) => AppConfig::load(path)?,
        (None, Some(path)) if path.exists() => AppConfig::load(path)?,
        _ => AppConfig::default(),
    };

    if let Some(dir) = assets_override.filter(|dir| !dir.is_empty()) {
        config.assets_dir = PathBuf::from(dir);
    }
    if let Some(dir) = &options.assets_dir {
        config.assets_dir = dir.clone();
    }
    if let Some(map) = &options.map_path {
        config.map_file = absolute_from_cwd(map);
    }
    Ok(config)
}

fn absolute_from_cwd(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}
