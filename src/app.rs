//! Application state
//!
//! Everything that outlives a frame: the drawing session, the UI-side pad
//! state and the configuration it was built from.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::canvas::{export_png, import_png, with_png_extension};
use crate::config::PadConfig;
use crate::pad::{PadLayout, PadState};

/// Main application state
pub struct AppState {
    pub pad: PadState,
    pub pad_layout: PadLayout,
    pub config: PadConfig,
}

impl AppState {
    /// Needs a live macroquad context (builds the canvas texture)
    pub fn new(config: PadConfig) -> Self {
        let pad = PadState::new(&config);
        let pad_layout = PadLayout::new(&pad);
        Self { pad, pad_layout, config }
    }

    /// Export the drawing at the canvas's current on-screen scale.
    /// Failures end up in the log and the status bar.
    pub fn save_png(&mut self, path: PathBuf, now: f64) {
        let path = with_png_extension(path);
        let cell_size = self.pad_layout.view.cell_size as u32;

        match export_png(&self.pad.get_pixels(), cell_size, &path) {
            Ok(()) => {
                info!("saved {} ({}px cells)", path.display(), cell_size);
                self.pad.dirty = false;
                self.pad.set_status(&format!("Saved to {}", path.display()), now, 3.0);
                self.pad.current_file = Some(path);
            }
            Err(e) => {
                error!("save to {} failed: {}", path.display(), e);
                self.pad.set_status(&format!("Save failed: {}", e), now, 5.0);
            }
        }
    }

    /// Load a PNG, scaled to the grid, replacing the drawing
    pub fn open_png(&mut self, path: &Path, now: f64) {
        let (w, h) = (self.pad.grid.width(), self.pad.grid.height());
        match import_png(path, w, h) {
            Ok(rows) => {
                self.pad.set_canvas(&rows);
                self.pad.current_file = Some(path.to_path_buf());
                info!("loaded {} into {}x{} grid", path.display(), w, h);
                self.pad.set_status(&format!("Loaded {}", path.display()), now, 3.0);
            }
            Err(e) => {
                error!("load of {} failed: {}", path.display(), e);
                self.pad.set_status(&format!("Load failed: {}", e), now, 5.0);
            }
        }
    }
}
