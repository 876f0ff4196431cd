//! Pen footprint and stroke interpolation (all in grid cells)

use super::PixelGrid;
use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushMode {
    Paint(Rgb),
    Erase,
}

/// Cells on each side of the center: size 1 paints one cell, 2-3 a 3x3 block, 4-5 a 5x5 block
pub fn pen_radius(pen_size: u32) -> i32 {
    (pen_size / 2) as i32
}

/// Square block of cells covered by one stamp centered on `center`
pub fn footprint(center: (i32, i32), pen_size: u32) -> impl Iterator<Item = (i32, i32)> {
    let r = pen_radius(pen_size);
    let (cx, cy) = center;
    (-r..=r).flat_map(move |dy| (-r..=r).map(move |dx| (cx + dx, cy + dy)))
}

/// Apply one stamp. Cells outside the grid are skipped.
/// Returns true if any cell changed.
pub fn stamp(grid: &mut PixelGrid, center: (i32, i32), pen_size: u32, mode: BrushMode) -> bool {
    let mut changed = false;
    for (x, y) in footprint(center, pen_size) {
        changed |= match mode {
            BrushMode::Paint(color) => grid.paint(x, y, color),
            BrushMode::Erase => grid.erase(x, y),
        };
    }
    changed
}

/// Bresenham line - all grid cells from `from` to `to`, inclusive
pub fn line_cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_from_size() {
        assert_eq!(pen_radius(1), 0);
        assert_eq!(pen_radius(2), 1);
        assert_eq!(pen_radius(3), 1);
        assert_eq!(pen_radius(5), 2);
    }

    #[test]
    fn test_footprint_sizes() {
        assert_eq!(footprint((5, 5), 1).collect::<Vec<_>>(), vec![(5, 5)]);
        assert_eq!(footprint((5, 5), 2).count(), 9);
        assert_eq!(footprint((5, 5), 3).count(), 9);
        assert_eq!(footprint((5, 5), 4).count(), 25);
        assert_eq!(footprint((5, 5), 5).count(), 25);
    }

    #[test]
    fn test_stamp_clips_at_edges() {
        let mut grid = PixelGrid::new(4, 4, Rgb::WHITE);
        assert!(stamp(&mut grid, (0, 0), 3, BrushMode::Paint(Rgb::BLACK)));
        // Only the in-bounds quarter of the 3x3 block lands
        assert_eq!(grid.painted_count(), 4);
        assert_eq!(grid.get_pixel(1, 1), Rgb::BLACK);
    }

    #[test]
    fn test_stamp_outside_grid_is_noop() {
        let mut grid = PixelGrid::new(4, 4, Rgb::WHITE);
        assert!(!stamp(&mut grid, (-5, -5), 3, BrushMode::Paint(Rgb::BLACK)));
        assert!(grid.is_blank());
    }

    #[test]
    fn test_erase_stamp() {
        let mut grid = PixelGrid::new(4, 4, Rgb::WHITE);
        stamp(&mut grid, (1, 1), 3, BrushMode::Paint(Rgb::RED));
        assert!(stamp(&mut grid, (1, 1), 1, BrushMode::Erase));
        assert_eq!(grid.get_pixel(1, 1), Rgb::WHITE);
        assert_eq!(grid.painted_count(), 8);
        assert!(!stamp(&mut grid, (1, 1), 1, BrushMode::Erase));
    }

    #[test]
    fn test_line_cells_endpoints_and_continuity() {
        let cells = line_cells((0, 0), (5, 2));
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(5, 2)));
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
        }
    }

    #[test]
    fn test_line_cells_single_point() {
        assert_eq!(line_cells((3, 3), (3, 3)), vec![(3, 3)]);
    }
}
