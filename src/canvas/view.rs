//! Mapping between grid cells and screen pixels
//!
//! Cell size is re-fit to the canvas panel every frame, so resizing the
//! window rescales the drawing without changing its resolution.

use crate::ui::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridView {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Screen pixels per grid cell (whole number, at least 1)
    pub cell_size: f32,
}

/// A grid line segment in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl GridView {
    /// Largest whole cell size at which the full grid fits in `canvas`
    pub fn fit(canvas: Rect, grid_w: usize, grid_h: usize) -> Self {
        let per_w = (canvas.w / grid_w.max(1) as f32).floor();
        let per_h = (canvas.h / grid_h.max(1) as f32).floor();
        Self {
            origin_x: canvas.x,
            origin_y: canvas.y,
            cell_size: per_w.min(per_h).max(1.0),
        }
    }

    /// Cell under a screen point. May be out of the grid (including negative).
    pub fn screen_to_cell(&self, sx: f32, sy: f32) -> (i32, i32) {
        (
            ((sx - self.origin_x) / self.cell_size).floor() as i32,
            ((sy - self.origin_y) / self.cell_size).floor() as i32,
        )
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, x: i32, y: i32) -> (f32, f32) {
        (
            self.origin_x + x as f32 * self.cell_size,
            self.origin_y + y as f32 * self.cell_size,
        )
    }

    pub fn cell_rect(&self, x: i32, y: i32) -> Rect {
        let (sx, sy) = self.cell_to_screen(x, y);
        Rect::new(sx, sy, self.cell_size, self.cell_size)
    }

    /// Screen size of the whole grid
    pub fn pixel_extent(&self, grid_w: usize, grid_h: usize) -> (f32, f32) {
        (grid_w as f32 * self.cell_size, grid_h as f32 * self.cell_size)
    }

    pub fn grid_rect(&self, grid_w: usize, grid_h: usize) -> Rect {
        let (w, h) = self.pixel_extent(grid_w, grid_h);
        Rect::new(self.origin_x, self.origin_y, w, h)
    }

    /// Overlay lines: `grid_w + 1` verticals then `grid_h + 1` horizontals
    pub fn grid_lines(&self, grid_w: usize, grid_h: usize) -> Vec<GridLine> {
        let (w, h) = self.pixel_extent(grid_w, grid_h);
        let mut lines = Vec::with_capacity(grid_w + grid_h + 2);

        for i in 0..=grid_w {
            let x = self.origin_x + i as f32 * self.cell_size;
            lines.push(GridLine { x1: x, y1: self.origin_y, x2: x, y2: self.origin_y + h });
        }
        for j in 0..=grid_h {
            let y = self.origin_y + j as f32 * self.cell_size;
            lines.push(GridLine { x1: self.origin_x, y1: y, x2: self.origin_x + w, y2: y });
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_smaller_axis() {
        let view = GridView::fit(Rect::new(10.0, 20.0, 780.0, 500.0), 64, 48);
        // 780/64 = 12.18, 500/48 = 10.41
        assert_eq!(view.cell_size, 10.0);
        assert_eq!((view.origin_x, view.origin_y), (10.0, 20.0));
    }

    #[test]
    fn test_fit_never_below_one() {
        let view = GridView::fit(Rect::new(0.0, 0.0, 30.0, 30.0), 100, 100);
        assert_eq!(view.cell_size, 1.0);
    }

    #[test]
    fn test_screen_to_cell() {
        let view = GridView { origin_x: 10.0, origin_y: 20.0, cell_size: 10.0 };
        assert_eq!(view.screen_to_cell(10.0, 20.0), (0, 0));
        assert_eq!(view.screen_to_cell(19.9, 29.9), (0, 0));
        assert_eq!(view.screen_to_cell(20.0, 45.0), (1, 2));
        // Left of / above the origin maps to negative cells
        assert_eq!(view.screen_to_cell(5.0, 15.0), (-1, -1));
    }

    #[test]
    fn test_cell_to_screen_inverts() {
        let view = GridView { origin_x: 4.0, origin_y: 8.0, cell_size: 6.0 };
        let (sx, sy) = view.cell_to_screen(3, 5);
        assert_eq!((sx, sy), (22.0, 38.0));
        assert_eq!(view.screen_to_cell(sx + 1.0, sy + 1.0), (3, 5));
    }

    #[test]
    fn test_grid_lines() {
        let view = GridView { origin_x: 0.0, origin_y: 0.0, cell_size: 10.0 };
        let lines = view.grid_lines(3, 2);
        assert_eq!(lines.len(), 4 + 3);
        assert_eq!(lines[3], GridLine { x1: 30.0, y1: 0.0, x2: 30.0, y2: 20.0 });
        assert_eq!(lines[6], GridLine { x1: 0.0, y1: 20.0, x2: 30.0, y2: 20.0 });
    }
}
