//! Pad layout: toolbar on top, canvas in the middle, status bar at the bottom

use macroquad::prelude::*;
use crate::canvas::GridView;
use crate::ui::{command_down, shift_down, Rect, Toolbar, UiContext, TEXT_COLOR};
use super::canvas_view::{draw_canvas_view, CanvasTexture};
use super::color_picker::{draw_color_picker, ColorPicker, PickerAction};
use super::PadState;

const TOOLBAR_HEIGHT: f32 = 34.0;
const STATUS_HEIGHT: f32 = 22.0;

/// Actions the pad UI hands back to the main loop (they need file dialogs)
#[derive(Debug, Clone, PartialEq)]
pub enum PadAction {
    None,
    Save,
    Open,
}

/// UI-side state that isn't part of the drawing
pub struct PadLayout {
    pub canvas_texture: CanvasTexture,
    pub color_picker: ColorPicker,
    /// Cell mapping from the last frame (PNG export uses its cell size)
    pub view: GridView,
    /// In-grid cell under the mouse last frame
    pub hovered_cell: Option<(i32, i32)>,
}

impl PadLayout {
    pub fn new(state: &PadState) -> Self {
        Self {
            canvas_texture: CanvasTexture::new(state),
            color_picker: ColorPicker::new(),
            view: GridView { origin_x: 0.0, origin_y: 0.0, cell_size: 1.0 },
            hovered_cell: None,
        }
    }
}

/// Draw the complete pad UI, returns action if triggered
pub fn draw_pad(ctx: &mut UiContext, layout: &mut PadLayout, state: &mut PadState) -> PadAction {
    let screen = Rect::screen(screen_width(), screen_height());
    let now = get_time();

    let toolbar_rect = screen.slice_top(TOOLBAR_HEIGHT);
    let main_rect = screen.remaining_after_top(TOOLBAR_HEIGHT);
    let status_rect = main_rect.slice_bottom(STATUS_HEIGHT);
    let canvas_rect = main_rect.remaining_after_bottom(STATUS_HEIGHT);

    // Popup swallows input for everything behind it
    let real_mouse = ctx.mouse;
    let picker_open = layout.color_picker.open;
    if picker_open {
        ctx.begin_modal();
    }

    let mut action = draw_toolbar(ctx, toolbar_rect, layout, state, now);

    draw_rectangle(canvas_rect.x, canvas_rect.y, canvas_rect.w, canvas_rect.h, Color::from_rgba(236, 236, 238, 255));
    let (view, hovered_cell) = draw_canvas_view(ctx, canvas_rect, state, &mut layout.canvas_texture);
    layout.view = view;
    layout.hovered_cell = hovered_cell;

    draw_status_bar(status_rect, layout, state, now);

    if picker_open {
        ctx.end_modal(real_mouse);
        match draw_color_picker(ctx, screen, &mut layout.color_picker) {
            PickerAction::Apply(color) => {
                state.choose_color(color);
                layout.color_picker.close();
                state.set_status(&format!("Pen color {}", color), now, 2.0);
            }
            PickerAction::Cancel => layout.color_picker.close(),
            PickerAction::InvalidInput(msg) => state.set_status(&format!("Not a color: {}", msg), now, 4.0),
            PickerAction::None => {}
        }
    } else {
        let shortcut = handle_shortcuts(layout, state, now);
        if shortcut != PadAction::None {
            action = shortcut;
        }
    }

    action
}

fn draw_toolbar(ctx: &mut UiContext, rect: Rect, layout: &mut PadLayout, state: &mut PadState, now: f64) -> PadAction {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(246, 246, 248, 255));
    draw_line(rect.x, rect.bottom() - 0.5, rect.right(), rect.bottom() - 0.5, 1.0, Color::from_rgba(200, 200, 205, 255));

    let mut action = PadAction::None;
    let mut toolbar = Toolbar::new(rect);

    if toolbar.button(ctx, "Choose Color", "Pick the pen color") {
        layout.color_picker.open_with(state.pen_color);
    }
    if toolbar.toggle(ctx, "Eraser", "Toggle eraser (E)", state.eraser_mode) {
        state.toggle_eraser();
    }
    if toolbar.button(ctx, "Clear", "Clear canvas (Delete)") {
        state.clear_canvas();
    }

    toolbar.separator();

    if toolbar.button(ctx, "Save", "Save as PNG (Ctrl+S)") {
        action = PadAction::Save;
    }
    if toolbar.button(ctx, "Open PNG", "Load a PNG into the grid (Ctrl+O)") {
        action = PadAction::Open;
    }

    toolbar.separator();

    if toolbar.toggle(ctx, "Grid", "Show/hide pixel grid (G)", state.show_grid) {
        state.toggle_grid();
    }
    if toolbar.button(ctx, "Undo", "Undo (Ctrl+Z)") {
        undo(state, now);
    }
    if toolbar.button(ctx, "Redo", "Redo (Ctrl+Y)") {
        redo(state, now);
    }

    toolbar.separator();

    toolbar.label("Pen size:");
    if let Some(size) = toolbar.slider(ctx, state.pen_size, 1, state.max_pen_size, 90.0) {
        state.set_pen_size(size);
    }
    toolbar.label(&state.pen_size.to_string());

    let tip = if state.eraser_mode {
        format!("Erasing with background {}", state.drawing_color())
    } else {
        format!("Pen {}", state.drawing_color())
    };
    toolbar.swatch(ctx, state.drawing_color().to_mq_color(), &tip);

    action
}

fn handle_shortcuts(layout: &mut PadLayout, state: &mut PadState, now: f64) -> PadAction {
    let ctrl = command_down();
    let shift = shift_down();

    if ctrl {
        if is_key_pressed(KeyCode::S) {
            return PadAction::Save;
        }
        if is_key_pressed(KeyCode::O) {
            return PadAction::Open;
        }
        if is_key_pressed(KeyCode::Z) {
            if shift { redo(state, now) } else { undo(state, now) }
        }
        if is_key_pressed(KeyCode::Y) {
            redo(state, now);
        }
        return PadAction::None;
    }

    if is_key_pressed(KeyCode::E) {
        state.toggle_eraser();
        let mode = if state.eraser_mode { "Eraser" } else { "Pen" };
        state.set_status(mode, now, 1.5);
    }
    if is_key_pressed(KeyCode::G) {
        state.toggle_grid();
    }
    if is_key_pressed(KeyCode::C) {
        layout.color_picker.open_with(state.pen_color);
    }
    if is_key_pressed(KeyCode::Delete) {
        state.clear_canvas();
    }
    if is_key_pressed(KeyCode::LeftBracket) {
        state.set_pen_size(state.pen_size.saturating_sub(1));
    }
    if is_key_pressed(KeyCode::RightBracket) {
        state.set_pen_size(state.pen_size + 1);
    }

    PadAction::None
}

fn undo(state: &mut PadState, now: f64) {
    if state.can_undo() {
        state.undo();
    } else {
        state.set_status("Nothing to undo", now, 1.5);
    }
}

fn redo(state: &mut PadState, now: f64) {
    if state.can_redo() {
        state.redo();
    } else {
        state.set_status("Nothing to redo", now, 1.5);
    }
}

fn draw_status_bar(rect: Rect, layout: &PadLayout, state: &PadState, now: f64) {
    draw_rectangle(rect.x.floor(), rect.y.floor(), rect.w, rect.h, Color::from_rgba(228, 228, 232, 255));

    let mode = if state.eraser_mode { "Eraser" } else { "Pen" };
    let mut info = format!(
        "{}x{} | cell {}px | size {} | {} | {} painted",
        state.grid.width(),
        state.grid.height(),
        layout.view.cell_size,
        state.pen_size,
        mode,
        state.grid.painted_count(),
    );
    if let Some((x, y)) = layout.hovered_cell {
        info.push_str(&format!(" | ({}, {}) {}", x, y, state.get_pixel(x, y)));
    }
    if state.dirty {
        info.push_str(" *");
    }
    draw_text(&info, (rect.x + 8.0).floor(), (rect.y + 15.0).floor(), 14.0, TEXT_COLOR);

    if let Some(msg) = state.status(now) {
        let dims = measure_text(msg, None, 14, 1.0);
        draw_text(
            msg,
            (rect.right() - dims.width - 10.0).floor(),
            (rect.y + 15.0).floor(),
            14.0,
            Color::from_rgba(20, 110, 40, 255),
        );
    }
}
