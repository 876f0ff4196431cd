//! Basic UI widgets: text buttons, slider, color swatch, toolbar layout

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// Accent color for active buttons and slider fill
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.55, 0.85, 1.0);

pub const TEXT_COLOR: Color = Color::new(0.1, 0.1, 0.12, 1.0);
const BUTTON_BG: Color = Color::new(0.92, 0.92, 0.94, 1.0);
const BUTTON_HOVER_BG: Color = Color::new(0.85, 0.87, 0.92, 1.0);
const BUTTON_PRESSED_BG: Color = Color::new(0.75, 0.78, 0.85, 1.0);
const BORDER_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

const FONT_SIZE: f32 = 14.0;

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str, tooltip: &str, is_active: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
        if !tooltip.is_empty() {
            ctx.set_tooltip(tooltip, ctx.mouse.x, ctx.mouse.y);
        }
    }

    let bg = if is_active {
        ACCENT_COLOR
    } else if pressed {
        BUTTON_PRESSED_BG
    } else if hovered {
        BUTTON_HOVER_BG
    } else {
        BUTTON_BG
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);

    let dims = measure_text(label, None, FONT_SIZE as u16, 1.0);
    // Round to integer pixels for crisp text
    let tx = (rect.x + (rect.w - dims.width) * 0.5).round();
    let ty = (rect.y + (rect.h + dims.height) * 0.5 - 1.0).round();
    let text_color = if is_active { WHITE } else { TEXT_COLOR };
    draw_text(label, tx, ty, FONT_SIZE, text_color);

    clicked
}

/// Width a text button needs for its label
pub fn button_width(label: &str) -> f32 {
    (measure_text(label, None, FONT_SIZE as u16, 1.0).width + 16.0).round()
}

/// Horizontal integer slider. Returns the new value while it is being dragged.
pub fn draw_slider(ctx: &mut UiContext, rect: Rect, value: u32, min: u32, max: u32) -> Option<u32> {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed {
            ctx.start_drag(id);
        }
    }

    let track_y = rect.y + rect.h * 0.5;
    let steps = max.saturating_sub(min);
    let span = steps.max(1) as f32;
    let t = (value.clamp(min, max) - min) as f32 / span;
    let thumb_x = rect.x + t * rect.w;

    // Track, filled part, thumb
    draw_line(rect.x, track_y, rect.right(), track_y, 4.0, Color::from_rgba(200, 200, 205, 255));
    draw_line(rect.x, track_y, thumb_x, track_y, 4.0, ACCENT_COLOR);
    // Tick marks only for short ranges (pen size), not 0-255 channels
    if steps <= 20 {
        for step in 0..=steps {
            let sx = rect.x + step as f32 / span * rect.w;
            draw_line(sx, track_y + 5.0, sx, track_y + 8.0, 1.0, BORDER_COLOR);
        }
    }
    let thumb_color = if ctx.is_dragging(id) || hovered { ACCENT_COLOR } else { WHITE };
    draw_circle(thumb_x, track_y, 6.0, thumb_color);
    draw_circle_lines(thumb_x, track_y, 6.0, 1.0, BORDER_COLOR);

    if ctx.is_dragging(id) {
        let t = ((ctx.mouse.x - rect.x) / rect.w.max(1.0)).clamp(0.0, 1.0);
        let new_value = (min + (t * span).round() as u32).min(max);
        if new_value != value {
            return Some(new_value);
        }
    }
    None
}

/// Filled color square with a border; thicker border when selected
pub fn draw_swatch(rect: Rect, color: Color, selected: bool) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    if selected {
        draw_rectangle_lines(rect.x - 1.0, rect.y - 1.0, rect.w + 2.0, rect.h + 2.0, 3.0, ACCENT_COLOR);
    } else {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);
    }
}

/// Panel background with a thin border
pub fn draw_panel(rect: Rect, bg: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);
}

/// Left-to-right toolbar layout helper
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 6.0,
            spacing: 6.0,
        }
    }

    fn item_rect(&mut self, width: f32) -> Rect {
        // Round positions to integer pixels for crisp rendering
        let r = Rect::new(self.cursor_x.round(), (self.rect.y + 4.0).round(), width, (self.rect.h - 8.0).round());
        self.cursor_x += width + self.spacing;
        r
    }

    pub fn button(&mut self, ctx: &mut UiContext, label: &str, tooltip: &str) -> bool {
        let r = self.item_rect(button_width(label));
        text_button(ctx, r, label, tooltip, false)
    }

    /// Button drawn highlighted while `is_active`
    pub fn toggle(&mut self, ctx: &mut UiContext, label: &str, tooltip: &str, is_active: bool) -> bool {
        let r = self.item_rect(button_width(label));
        text_button(ctx, r, label, tooltip, is_active)
    }

    pub fn separator(&mut self) {
        self.cursor_x += self.spacing;
        draw_line(
            self.cursor_x,
            self.rect.y + 6.0,
            self.cursor_x,
            self.rect.bottom() - 6.0,
            1.0,
            BORDER_COLOR,
        );
        self.cursor_x += self.spacing * 2.0;
    }

    pub fn label(&mut self, text: &str) {
        let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
        let ty = (self.rect.y + (self.rect.h + dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), ty, FONT_SIZE, TEXT_COLOR);
        self.cursor_x += dims.width + self.spacing;
    }

    pub fn slider(&mut self, ctx: &mut UiContext, value: u32, min: u32, max: u32, width: f32) -> Option<u32> {
        let r = self.item_rect(width);
        // Leave room for the thumb at both ends
        draw_slider(ctx, Rect::new(r.x + 6.0, r.y, r.w - 12.0, r.h), value, min, max)
    }

    pub fn swatch(&mut self, ctx: &mut UiContext, color: Color, tooltip: &str) {
        let size = self.rect.h - 10.0;
        let r = Rect::new(self.cursor_x.round(), (self.rect.y + 5.0).round(), size, size);
        self.cursor_x += size + self.spacing;
        draw_swatch(r, color, false);
        if ctx.mouse.inside(&r) && !tooltip.is_empty() {
            ctx.set_tooltip(tooltip, ctx.mouse.x, ctx.mouse.y);
        }
    }
}
