//! Fixed-resolution pixel grid
//!
//! The grid's size never follows the window: a 64x48 drawing stays 64x48
//! however the canvas is scaled on screen.

use crate::color::Rgb;

/// Largest grid side in cells; the canvas texture is one texel per cell
pub const MAX_GRID_DIM: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    background: Rgb,
    /// Row-major; `None` = nothing painted, background shows through
    cells: Vec<Option<Rgb>>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        let width = width.clamp(1, MAX_GRID_DIM);
        let height = height.clamp(1, MAX_GRID_DIM);
        Self {
            width,
            height,
            background,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Paint one cell. Returns true if the cell changed.
    pub fn paint(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i] != Some(color) => {
                self.cells[i] = Some(color);
                true
            }
            _ => false,
        }
    }

    /// Remove the painted pixel at a cell. Returns true if there was one.
    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.cells[i].take().is_some(),
            None => false,
        }
    }

    /// Color shown at a cell; out-of-bounds reads as the background
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        self.index(x, y)
            .and_then(|i| self.cells[i])
            .unwrap_or(self.background)
    }

    /// Whole grid as rows of colors (`height` rows of `width` entries)
    pub fn get_pixels(&self) -> Vec<Vec<Rgb>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.unwrap_or(self.background)).collect())
            .collect()
    }

    /// Write a color at `(x, y)`; positions outside the grid are ignored
    pub fn set_pixel(&mut self, color: Rgb, position: (i32, i32)) {
        let (x, y) = position;
        self.paint(x, y, color);
    }

    /// Replace the drawing with `rows`, cropped to the grid.
    ///
    /// Existing pixels are removed even if `rows` turns out to be empty.
    /// The column count comes from the first row.
    pub fn set_canvas(&mut self, rows: &[Vec<Rgb>]) {
        self.clear();

        let Some(first) = rows.first() else {
            return;
        };
        if first.is_empty() {
            return;
        }

        let height = rows.len().min(self.height);
        let width = first.len().min(self.width);

        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, color) in row.iter().take(width).enumerate() {
                self.cells[y * self.width + x] = Some(*color);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// RGBA bytes, one pixel per cell.
    ///
    /// With `transparent_background` unpainted cells get alpha 0 so whatever is
    /// drawn beneath (grid lines) stays visible.
    pub fn to_rgba(&self, transparent_background: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() * 4);
        for cell in &self.cells {
            match cell {
                Some(color) => bytes.extend_from_slice(&color.to_rgba_bytes()),
                None if transparent_background => bytes.extend_from_slice(&[0, 0, 0, 0]),
                None => bytes.extend_from_slice(&self.background.to_rgba_bytes()),
            }
        }
        bytes
    }
}
