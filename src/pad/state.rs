//! Drawing session state

use std::path::PathBuf;

use tracing::{debug, info};

use crate::canvas::{line_cells, stamp, BrushMode, PixelGrid};
use crate::color::Rgb;
use crate::config::PadConfig;

/// Pad state: the grid plus everything the controls change
pub struct PadState {
    /// The drawing
    pub grid: PixelGrid,

    /// Selected pen color (kept while the eraser is active)
    pub pen_color: Rgb,

    /// Pen size in cells, 1..=max_pen_size
    pub pen_size: u32,
    pub max_pen_size: u32,

    /// Paint with the background instead of the pen color
    pub eraser_mode: bool,

    /// Grid overlay
    pub show_grid: bool,
    pub grid_line_color: Rgb,

    /// Last cell stamped by the current stroke
    last_cell: Option<(i32, i32)>,
    /// Grid as it was when the current stroke began
    stroke_start: Option<PixelGrid>,

    /// Undo/redo (whole-grid snapshots)
    pub undo_stack: Vec<PixelGrid>,
    pub redo_stack: Vec<PixelGrid>,
    undo_limit: usize,

    /// Changed since last save
    pub dirty: bool,

    /// Bumped on every grid change so cached textures know to rebuild
    revision: u64,

    /// Status message (shown in status bar)
    pub status_message: Option<(String, f64)>, // (message, expiry_time)

    /// Last PNG saved to / opened from
    pub current_file: Option<PathBuf>,
}

impl PadState {
    pub fn new(config: &PadConfig) -> Self {
        Self {
            grid: PixelGrid::new(config.grid_width, config.grid_height, config.background_rgb()),
            pen_color: config.pen_rgb(),
            pen_size: config.pen_size.clamp(1, config.max_pen_size.max(1)),
            max_pen_size: config.max_pen_size.max(1),
            eraser_mode: false,
            show_grid: config.show_grid,
            grid_line_color: config.grid_line_rgb(),
            last_cell: None,
            stroke_start: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            undo_limit: config.undo_limit,
            dirty: false,
            revision: 0,
            status_message: None,
            current_file: None,
        }
    }

    /// `base` with the user-adjustable settings of this session written back
    pub fn to_config(&self, base: &PadConfig) -> PadConfig {
        PadConfig {
            pen_color: self.pen_color.to_hex(),
            pen_size: self.pen_size,
            show_grid: self.show_grid,
            ..base.clone()
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }

    /// Pick a new pen color; picking a color means painting with it
    pub fn choose_color(&mut self, color: Rgb) {
        self.pen_color = color;
        if self.eraser_mode {
            self.eraser_mode = false;
            info!("switched to pen mode");
        }
    }

    pub fn toggle_eraser(&mut self) {
        self.eraser_mode = !self.eraser_mode;
        if self.eraser_mode {
            info!("switched to eraser mode");
        } else {
            info!("switched to pen mode");
        }
    }

    pub fn set_pen_size(&mut self, size: u32) {
        self.pen_size = size.clamp(1, self.max_pen_size);
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Color a stroke lays down right now
    pub fn drawing_color(&self) -> Rgb {
        if self.eraser_mode {
            self.grid.background()
        } else {
            self.pen_color
        }
    }

    fn brush_mode(&self) -> BrushMode {
        if self.eraser_mode {
            BrushMode::Erase
        } else {
            BrushMode::Paint(self.pen_color)
        }
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke_start.is_some()
    }

    /// Start a stroke at `cell` (mouse pressed on the canvas)
    pub fn begin_stroke(&mut self, cell: (i32, i32)) {
        self.stroke_start = Some(self.grid.clone());
        self.last_cell = Some(cell);
        let mode = self.brush_mode();
        if stamp(&mut self.grid, cell, self.pen_size, mode) {
            self.mark_changed();
        }
    }

    /// Extend the stroke to `cell`, filling the cells skipped since last frame
    pub fn continue_stroke(&mut self, cell: (i32, i32)) {
        let Some(last) = self.last_cell else {
            self.begin_stroke(cell);
            return;
        };
        if last == cell {
            return;
        }

        let mode = self.brush_mode();
        let mut changed = false;
        // First cell was stamped already
        for c in line_cells(last, cell).into_iter().skip(1) {
            changed |= stamp(&mut self.grid, c, self.pen_size, mode);
        }
        self.last_cell = Some(cell);
        if changed {
            self.mark_changed();
        }
    }

    /// Finish the stroke; records an undo step if it changed anything
    pub fn end_stroke(&mut self) {
        self.last_cell = None;
        if let Some(before) = self.stroke_start.take() {
            if before != self.grid {
                self.push_undo(before);
            }
        }
    }

    fn push_undo(&mut self, snapshot: PixelGrid) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.undo_limit {
            self.undo_stack.remove(0);
        }
    }

    fn save_undo(&mut self) {
        self.push_undo(self.grid.clone());
    }

    /// Remove every painted pixel (grid overlay is left as is)
    pub fn clear_canvas(&mut self) {
        if self.grid.is_blank() {
            return;
        }
        self.save_undo();
        self.grid.clear();
        self.mark_changed();
        debug!("canvas cleared");
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        self.grid.get_pixel(x, y)
    }

    pub fn get_pixels(&self) -> Vec<Vec<Rgb>> {
        self.grid.get_pixels()
    }

    pub fn set_pixel(&mut self, color: Rgb, position: (i32, i32)) {
        let (x, y) = position;
        if !self.grid.in_bounds(x, y) {
            return;
        }
        self.save_undo();
        self.grid.set_pixel(color, position);
        self.mark_changed();
    }

    pub fn set_canvas(&mut self, rows: &[Vec<Rgb>]) {
        self.save_undo();
        self.grid.set_canvas(rows);
        self.mark_changed();
    }

    pub fn can_undo(&self) -> bool {
        !self.is_stroking() && !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_stroking() && !self.redo_stack.is_empty()
    }

    /// Ignored mid-stroke: the stroke's own snapshot would be pushed over it
    pub fn undo(&mut self) {
        if self.is_stroking() {
            return;
        }
        if let Some(prev) = self.undo_stack.pop() {
            let current = std::mem::replace(&mut self.grid, prev);
            self.redo_stack.push(current);
            self.mark_changed();
        }
    }

    pub fn redo(&mut self) {
        if self.is_stroking() {
            return;
        }
        if let Some(next) = self.redo_stack.pop() {
            let current = std::mem::replace(&mut self.grid, next);
            self.undo_stack.push(current);
            self.mark_changed();
        }
    }

    /// Show `message` until `now + duration_secs`
    pub fn set_status(&mut self, message: &str, now: f64, duration_secs: f64) {
        self.status_message = Some((message.to_string(), now + duration_secs));
    }

    /// Current status message if not expired
    pub fn status(&self, now: f64) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if now < *expiry => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PadState {
        PadState::new(&PadConfig {
            grid_width: 8,
            grid_height: 6,
            ..PadConfig::default()
        })
    }

    #[test]
    fn test_new_from_config() {
        let s = state();
        assert_eq!((s.grid.width(), s.grid.height()), (8, 6));
        assert_eq!(s.pen_color, Rgb::BLACK);
        assert_eq!(s.pen_size, 1);
        assert!(!s.eraser_mode);
        assert!(!s.show_grid);
    }

    #[test]
    fn test_stroke_paints_and_interpolates() {
        let mut s = state();
        s.begin_stroke((0, 0));
        s.continue_stroke((4, 0));
        s.end_stroke();
        for x in 0..=4 {
            assert_eq!(s.get_pixel(x, 0), Rgb::BLACK);
        }
        assert_eq!(s.grid.painted_count(), 5);
        assert_eq!(s.undo_stack.len(), 1);
        assert!(!s.is_stroking());
    }

    #[test]
    fn test_pen_size_widens_stroke() {
        let mut s = state();
        s.set_pen_size(3);
        s.begin_stroke((2, 2));
        s.end_stroke();
        assert_eq!(s.grid.painted_count(), 9);
        assert_eq!(s.get_pixel(1, 1), Rgb::BLACK);
        assert_eq!(s.get_pixel(3, 3), Rgb::BLACK);
    }

    #[test]
    fn test_pen_size_clamped() {
        let mut s = state();
        s.set_pen_size(0);
        assert_eq!(s.pen_size, 1);
        s.set_pen_size(99);
        assert_eq!(s.pen_size, 5);
    }

    #[test]
    fn test_eraser_restores_background() {
        let mut s = state();
        s.begin_stroke((1, 1));
        s.end_stroke();
        s.toggle_eraser();
        assert_eq!(s.drawing_color(), Rgb::WHITE);
        s.begin_stroke((1, 1));
        s.end_stroke();
        assert_eq!(s.get_pixel(1, 1), Rgb::WHITE);
        assert!(s.grid.is_blank());
        // Pen color survives the eraser round trip
        s.toggle_eraser();
        assert_eq!(s.drawing_color(), Rgb::BLACK);
    }

    #[test]
    fn test_choose_color_leaves_eraser() {
        let mut s = state();
        s.toggle_eraser();
        s.choose_color(Rgb::RED);
        assert!(!s.eraser_mode);
        assert_eq!(s.drawing_color(), Rgb::RED);
    }

    #[test]
    fn test_stroke_outside_grid_records_no_undo() {
        let mut s = state();
        s.begin_stroke((-3, -3));
        s.continue_stroke((-1, -5));
        s.end_stroke();
        assert!(s.grid.is_blank());
        assert!(!s.can_undo());
        assert!(!s.dirty);
    }

    #[test]
    fn test_clear_keeps_grid_overlay() {
        let mut s = state();
        s.toggle_grid();
        s.begin_stroke((0, 0));
        s.end_stroke();
        s.clear_canvas();
        assert!(s.grid.is_blank());
        assert!(s.show_grid);
        s.undo();
        assert_eq!(s.get_pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_undo_redo() {
        let mut s = state();
        s.begin_stroke((0, 0));
        s.end_stroke();
        s.choose_color(Rgb::BLUE);
        s.begin_stroke((0, 0));
        s.end_stroke();

        s.undo();
        assert_eq!(s.get_pixel(0, 0), Rgb::BLACK);
        s.undo();
        assert_eq!(s.get_pixel(0, 0), Rgb::WHITE);
        assert!(!s.can_undo());
        s.redo();
        s.redo();
        assert_eq!(s.get_pixel(0, 0), Rgb::BLUE);
        assert!(!s.can_redo());
    }

    #[test]
    fn test_undo_ignored_while_stroking() {
        let mut s = state();
        s.begin_stroke((0, 0));
        s.end_stroke();
        s.begin_stroke((1, 0));
        assert!(!s.can_undo());
        s.undo();
        s.continue_stroke((2, 0));
        s.end_stroke();

        for x in 0..=2 {
            assert_eq!(s.get_pixel(x, 0), Rgb::BLACK);
        }
        assert_eq!(s.undo_stack.len(), 2);

        // Both strokes undo in order once the drag is over
        s.undo();
        assert_eq!(s.get_pixel(0, 0), Rgb::BLACK);
        assert_eq!(s.get_pixel(1, 0), Rgb::WHITE);
        s.undo();
        assert!(s.grid.is_blank());
        assert_eq!(s.redo_stack.len(), 2);
    }

    #[test]
    fn test_redo_ignored_while_stroking() {
        let mut s = state();
        s.begin_stroke((0, 0));
        s.end_stroke();
        s.undo();
        s.begin_stroke((3, 3));
        s.redo();
        assert_eq!(s.get_pixel(0, 0), Rgb::WHITE);
        s.end_stroke();
        assert_eq!(s.get_pixel(3, 3), Rgb::BLACK);
        assert!(!s.can_redo());
    }

    #[test]
    fn test_undo_limit() {
        let mut s = PadState::new(&PadConfig { undo_limit: 3, ..PadConfig::default() });
        for x in 0..6 {
            s.begin_stroke((x, 0));
            s.end_stroke();
        }
        assert_eq!(s.undo_stack.len(), 3);
    }

    #[test]
    fn test_set_pixel_and_set_canvas_are_undoable() {
        let mut s = state();
        s.set_pixel(Rgb::GREEN, (2, 3));
        assert_eq!(s.get_pixel(2, 3), Rgb::GREEN);
        s.set_pixel(Rgb::GREEN, (20, 30));
        assert_eq!(s.undo_stack.len(), 1);

        s.set_canvas(&[vec![Rgb::RED; 2]]);
        assert_eq!(s.get_pixel(2, 3), Rgb::WHITE);
        assert_eq!(s.get_pixels()[0][1], Rgb::RED);

        s.undo();
        assert_eq!(s.get_pixel(2, 3), Rgb::GREEN);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut s = state();
        let r0 = s.revision();
        s.begin_stroke((0, 0));
        let r1 = s.revision();
        assert!(r1 > r0);
        // Same cell again changes nothing
        s.continue_stroke((0, 0));
        assert_eq!(s.revision(), r1);
    }

    #[test]
    fn test_settings_written_back_to_config() {
        let mut s = state();
        s.choose_color(Rgb::new(0x12, 0x34, 0x56));
        s.set_pen_size(4);
        s.toggle_grid();
        let base = PadConfig { grid_width: 8, grid_height: 6, ..PadConfig::default() };
        let config = s.to_config(&base);
        assert_eq!(config.pen_color, "#123456");
        assert_eq!(config.pen_size, 4);
        assert!(config.show_grid);
        assert_eq!(config.grid_width, 8);
        assert_eq!(config.background_color, base.background_color);
    }

    #[test]
    fn test_status_expiry() {
        let mut s = state();
        s.set_status("Saved", 10.0, 3.0);
        assert_eq!(s.status(11.0), Some("Saved"));
        assert_eq!(s.status(13.5), None);
    }
}
