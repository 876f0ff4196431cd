//! PNG export and import

use std::path::{Path, PathBuf};

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

use crate::color::Rgb;
use crate::error::PadError;

/// Render rows from `PixelGrid::get_pixels` at `cell_size` image pixels per cell.
/// Width comes from the first row; missing cells in shorter rows come out white.
pub fn render_image(rows: &[Vec<Rgb>], cell_size: u32) -> RgbaImage {
    let cell_size = cell_size.max(1);
    let width = rows.first().map_or(0, Vec::len) as u32 * cell_size;
    let height = rows.len() as u32 * cell_size;

    RgbaImage::from_fn(width, height, |px, py| {
        let color = rows
            .get((py / cell_size) as usize)
            .and_then(|row| row.get((px / cell_size) as usize))
            .copied()
            .unwrap_or(Rgb::WHITE);
        Rgba(color.to_rgba_bytes())
    })
}

/// Write rows of pixels to a PNG file
pub fn export_png<P: AsRef<Path>>(rows: &[Vec<Rgb>], cell_size: u32, path: P) -> Result<(), PadError> {
    let img = render_image(rows, cell_size);
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

/// Load a PNG and scale it (nearest neighbor) to `grid_w` x `grid_h`.
/// Alpha is dropped; the result feeds `PixelGrid::set_canvas`.
pub fn import_png<P: AsRef<Path>>(path: P, grid_w: usize, grid_h: usize) -> Result<Vec<Vec<Rgb>>, PadError> {
    let img = image::open(path.as_ref())?.to_rgba8();
    rows_from_image(&img, grid_w, grid_h)
}

fn rows_from_image(img: &RgbaImage, grid_w: usize, grid_h: usize) -> Result<Vec<Vec<Rgb>>, PadError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(PadError::EmptyImage);
    }

    let (w, h) = (grid_w.max(1) as u32, grid_h.max(1) as u32);
    let scaled = if img.dimensions() == (w, h) {
        img.clone()
    } else {
        imageops::resize(img, w, h, FilterType::Nearest)
    };

    Ok(scaled
        .rows()
        .map(|row| row.map(|p| Rgb::new(p[0], p[1], p[2])).collect())
        .collect())
}

/// Append `.png` when the chosen path has no extension
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelGrid;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixel_pad_{}_{}.png", name, std::process::id()))
    }

    #[test]
    fn test_render_scales_cells() {
        let mut grid = PixelGrid::new(2, 1, Rgb::WHITE);
        grid.paint(1, 0, Rgb::RED);
        let img = render_image(&grid.get_pixels(), 3);
        assert_eq!(img.dimensions(), (6, 3));
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(2, 2), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(3, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(5, 2), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_export_then_import_restores_drawing() {
        let mut grid = PixelGrid::new(4, 3, Rgb::WHITE);
        grid.paint(0, 0, Rgb::BLUE);
        grid.paint(3, 2, Rgb::new(12, 34, 56));

        let path = temp_path("roundtrip");
        export_png(&grid.get_pixels(), 5, &path).unwrap();
        let rows = import_png(&path, 4, 3).unwrap();
        let _ = std::fs::remove_file(&path);

        let mut restored = PixelGrid::new(4, 3, Rgb::WHITE);
        restored.set_canvas(&rows);
        assert_eq!(restored.get_pixels(), grid.get_pixels());
    }

    #[test]
    fn test_import_missing_file_errors() {
        let result = import_png(temp_path("does_not_exist"), 4, 4);
        assert!(matches!(result, Err(PadError::Image(_))));
    }

    #[test]
    fn test_render_ragged_rows_pads_with_white() {
        let img = render_image(&[vec![Rgb::RED, Rgb::RED], vec![Rgb::BLUE]], 1);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 1), &Rgba([0, 0, 255, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(rows_from_image(&img, 4, 4), Err(PadError::EmptyImage)));
    }

    #[test]
    fn test_png_extension() {
        assert_eq!(with_png_extension(PathBuf::from("a/b")), PathBuf::from("a/b.png"));
        assert_eq!(with_png_extension(PathBuf::from("c.png")), PathBuf::from("c.png"));
    }
}
