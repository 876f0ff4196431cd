//! Canvas panel - the pixel grid scaled to fit, with painting input
//!
//! Draw order: background, grid overlay, painted cells, brush outline.
//! Painted cells come from one nearest-filtered texture (one texel per cell)
//! that is rebuilt only when the grid's revision changes.

use macroquad::prelude::*;
use crate::canvas::{pen_radius, GridView, MAX_GRID_DIM};
use crate::ui::{shift_down, Rect, UiContext};
use super::PadState;

/// GPU copy of the grid, keyed by `PadState::revision`
pub struct CanvasTexture {
    texture: Texture2D,
    revision: u64,
}

impl CanvasTexture {
    pub fn new(state: &PadState) -> Self {
        Self {
            texture: build_texture(state),
            revision: state.revision(),
        }
    }

    fn sync(&mut self, state: &PadState) -> &Texture2D {
        if self.revision != state.revision() {
            self.texture = build_texture(state);
            self.revision = state.revision();
        }
        &self.texture
    }
}

// Grid sides are capped so they always fit a u16 texture dimension
const _: () = assert!(MAX_GRID_DIM <= u16::MAX as usize);

fn build_texture(state: &PadState) -> Texture2D {
    let grid = &state.grid;
    let texture = Texture2D::from_rgba8(grid.width() as u16, grid.height() as u16, &grid.to_rgba(true));
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Draw the canvas and handle strokes.
/// Returns the view used this frame and the in-grid cell under the mouse.
pub fn draw_canvas_view(
    ctx: &mut UiContext,
    rect: Rect,
    state: &mut PadState,
    cache: &mut CanvasTexture,
) -> (GridView, Option<(i32, i32)>) {
    let (grid_w, grid_h) = (state.grid.width(), state.grid.height());
    let view = GridView::fit(rect.pad(4.0), grid_w, grid_h);
    let grid_rect = view.grid_rect(grid_w, grid_h);

    let mouse_cell = view.screen_to_cell(ctx.mouse.x, ctx.mouse.y);
    let hovered = ctx.mouse.inside(&grid_rect) && state.grid.in_bounds(mouse_cell.0, mouse_cell.1);

    // Strokes: press on the canvas starts one, it follows the mouse until release.
    // Shift+click writes the single cell under the mouse instead.
    if ctx.mouse.clicked(&rect) {
        if shift_down() {
            let color = state.drawing_color();
            state.set_pixel(color, mouse_cell);
        } else {
            state.begin_stroke(mouse_cell);
        }
    } else if state.is_stroking() {
        if ctx.mouse.left_down {
            state.continue_stroke(mouse_cell);
        } else {
            state.end_stroke();
        }
    }

    draw_rectangle(grid_rect.x, grid_rect.y, grid_rect.w, grid_rect.h, state.grid.background().to_mq_color());

    if state.show_grid {
        let line_color = state.grid_line_color.to_mq_color();
        for line in view.grid_lines(grid_w, grid_h) {
            draw_line(line.x1, line.y1, line.x2, line.y2, 1.0, line_color);
        }
    }

    let texture = cache.sync(state);
    draw_texture_ex(
        texture,
        grid_rect.x,
        grid_rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(grid_rect.w, grid_rect.h)),
            ..Default::default()
        },
    );

    draw_rectangle_lines(grid_rect.x, grid_rect.y, grid_rect.w, grid_rect.h, 1.0, Color::from_rgba(150, 150, 155, 255));

    if hovered {
        draw_brush_outline(&view, mouse_cell, state);
        (view, Some(mouse_cell))
    } else {
        (view, None)
    }
}

/// Outline of the cells the next stamp would cover
fn draw_brush_outline(view: &GridView, center: (i32, i32), state: &PadState) {
    let r = pen_radius(state.pen_size);
    let top_left = view.cell_rect(center.0 - r, center.1 - r);
    let side = (2 * r + 1) as f32 * view.cell_size;

    // Contrast against whatever is under the cursor
    let under = state.get_pixel(center.0, center.1);
    let outline = if under.luma() > 128.0 {
        Color::from_rgba(40, 40, 40, 200)
    } else {
        Color::from_rgba(235, 235, 235, 200)
    };
    draw_rectangle_lines(top_left.x, top_left.y, side, side, 1.0, outline);
}
