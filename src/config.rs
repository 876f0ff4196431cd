//! Pad configuration
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable.
//! Colors are stored as color specs ("black", "#e0e0e0").

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::canvas::MAX_GRID_DIM;
use crate::color::Rgb;
use crate::error::PadError;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "pixel_pad.ron";

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const DEFAULT_GRID_WIDTH: usize = 64;
pub const DEFAULT_GRID_HEIGHT: usize = 48;
pub const DEFAULT_MAX_PEN_SIZE: u32 = 5;
pub const DEFAULT_UNDO_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Logical grid resolution in cells
    pub grid_width: usize,
    pub grid_height: usize,
    pub pen_color: String,
    /// Canvas background; also what the eraser paints with
    pub background_color: String,
    pub grid_line_color: String,
    pub pen_size: u32,
    pub max_pen_size: u32,
    pub show_grid: bool,
    pub undo_limit: usize,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            pen_color: "black".to_string(),
            background_color: "white".to_string(),
            grid_line_color: "#e0e0e0".to_string(),
            pen_size: 1,
            max_pen_size: DEFAULT_MAX_PEN_SIZE,
            show_grid: false,
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }
}

impl PadConfig {
    /// Clamp numeric fields into usable ranges
    pub fn sanitized(mut self) -> Self {
        self.window_width = self.window_width.max(200);
        self.window_height = self.window_height.max(150);
        self.grid_width = self.grid_width.clamp(1, MAX_GRID_DIM);
        self.grid_height = self.grid_height.clamp(1, MAX_GRID_DIM);
        self.max_pen_size = self.max_pen_size.max(1);
        self.pen_size = self.pen_size.clamp(1, self.max_pen_size);
        self
    }

    pub fn pen_rgb(&self) -> Rgb {
        color_or_default("pen_color", &self.pen_color, Rgb::BLACK)
    }

    pub fn background_rgb(&self) -> Rgb {
        color_or_default("background_color", &self.background_color, Rgb::WHITE)
    }

    pub fn grid_line_rgb(&self) -> Rgb {
        color_or_default("grid_line_color", &self.grid_line_color, Rgb::new(224, 224, 224))
    }
}

fn color_or_default(field: &str, spec: &str, default: Rgb) -> Rgb {
    match Rgb::parse(spec) {
        Ok(rgb) => rgb,
        Err(e) => {
            warn!("config {}: '{}' is not a color ({}), using {}", field, spec, e, default);
            default
        }
    }
}

/// Load config from a RON file. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PadConfig, PadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(PadConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config: PadConfig = ron::from_str(&contents)?;
    Ok(config.sanitized())
}

/// Save config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &PadConfig, path: P) -> Result<(), PadError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixel_pad_cfg_{}_{}.ron", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = PadConfig::default();
        assert_eq!((config.grid_width, config.grid_height), (64, 48));
        assert_eq!(config.pen_rgb(), Rgb::BLACK);
        assert_eq!(config.background_rgb(), Rgb::WHITE);
        assert_eq!(config.grid_line_rgb(), Rgb::new(224, 224, 224));
        assert_eq!(config.max_pen_size, 5);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(temp_path("missing")).unwrap();
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_load");
        let config = PadConfig {
            grid_width: 100,
            grid_height: 100,
            pen_color: "#ff0000".to_string(),
            show_grid: true,
            ..PadConfig::default()
        };
        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.pen_rgb(), Rgb::RED);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "(grid_width: 32, pen_size: 9)").unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.grid_width, 32);
        assert_eq!(loaded.grid_height, DEFAULT_GRID_HEIGHT);
        // Clamped to max_pen_size
        assert_eq!(loaded.pen_size, 5);
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("broken");
        std::fs::write(&path, "(grid_width: \"wide\")").unwrap();
        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(PadError::ConfigParse(_))));
    }

    #[test]
    fn test_bad_color_falls_back() {
        let config = PadConfig {
            background_color: "not-a-color".to_string(),
            ..PadConfig::default()
        };
        assert_eq!(config.background_rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_sanitize_zero_grid() {
        let config = PadConfig { grid_width: 0, max_pen_size: 0, pen_size: 0, ..PadConfig::default() }.sanitized();
        assert_eq!(config.grid_width, 1);
        assert_eq!(config.max_pen_size, 1);
        assert_eq!(config.pen_size, 1);
    }

    #[test]
    fn test_sanitize_oversized_grid() {
        let config = PadConfig { grid_width: 70_000, grid_height: 5000, ..PadConfig::default() }.sanitized();
        assert_eq!(config.grid_width, MAX_GRID_DIM);
        assert_eq!(config.grid_height, MAX_GRID_DIM);
    }
}
