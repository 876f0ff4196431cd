//! Color picker popup - palette swatches, RGB sliders and a text field
//!
//! The text field takes anything `Rgb::parse` does ("red", "#f80", "ff8800").

use macroquad::prelude::*;
use crate::color::{ColorParseError, Rgb, DEFAULT_PALETTE, PALETTE_COLS};
use crate::ui::{draw_panel, draw_slider, draw_swatch, text_button, Rect, UiContext, TEXT_COLOR};

const POPUP_WIDTH: f32 = 300.0;
const POPUP_HEIGHT: f32 = 330.0;
const TITLE_HEIGHT: f32 = 26.0;
const SWATCH_SIZE: f32 = 28.0;
const SWATCH_GAP: f32 = 6.0;
const MAX_INPUT_LEN: usize = 16;

/// What the popup asks the caller to do this frame
#[derive(Debug, Clone, PartialEq)]
pub enum PickerAction {
    None,
    Apply(Rgb),
    Cancel,
    InvalidInput(String),
}

pub struct ColorPicker {
    pub open: bool,
    /// Color being edited (applied on OK)
    pub working: Rgb,
    /// Color the picker was opened with
    pub original: Rgb,
    pub input: String,
    pub input_focused: bool,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self {
            open: false,
            working: Rgb::BLACK,
            original: Rgb::BLACK,
            input: String::new(),
            input_focused: false,
        }
    }

    pub fn open_with(&mut self, current: Rgb) {
        self.open = true;
        self.working = current;
        self.original = current;
        self.input = current.to_hex();
        self.input_focused = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.input_focused = false;
    }

    /// Pick a color from swatches or sliders; the text field follows
    pub fn set_working(&mut self, color: Rgb) {
        self.working = color;
        self.input = color.to_hex();
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.input.chars().count() < MAX_INPUT_LEN {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// What the text field would give right now, or the working color while
    /// it doesn't parse yet
    pub fn preview(&self) -> Rgb {
        Rgb::parse_or(&self.input, self.working)
    }

    /// Parse the text field into the working color
    pub fn commit_input(&mut self) -> Result<Rgb, ColorParseError> {
        let color = Rgb::parse(&self.input)?;
        self.working = color;
        Ok(color)
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the popup centered on screen. Call after `UiContext::end_modal`.
pub fn draw_color_picker(ctx: &mut UiContext, screen: Rect, picker: &mut ColorPicker) -> PickerAction {
    let mut action = PickerAction::None;

    // Dim everything behind
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, Color::new(0.0, 0.0, 0.0, 0.35));

    let popup = screen.centered(POPUP_WIDTH, POPUP_HEIGHT);
    draw_panel(popup, Color::from_rgba(248, 248, 250, 255));
    draw_rectangle(popup.x, popup.y, popup.w, TITLE_HEIGHT, Color::from_rgba(225, 228, 235, 255));
    draw_text("Choose Color", (popup.x + 10.0).round(), (popup.y + 18.0).round(), 16.0, TEXT_COLOR);

    let body = Rect::new(popup.x + 12.0, popup.y + TITLE_HEIGHT + 10.0, popup.w - 24.0, popup.h - TITLE_HEIGHT - 20.0);

    // Palette swatches
    for (i, color) in DEFAULT_PALETTE.iter().enumerate() {
        let col = (i % PALETTE_COLS) as f32;
        let row = (i / PALETTE_COLS) as f32;
        let r = Rect::new(
            body.x + col * (SWATCH_SIZE + SWATCH_GAP),
            body.y + row * (SWATCH_SIZE + SWATCH_GAP),
            SWATCH_SIZE,
            SWATCH_SIZE,
        );
        draw_swatch(r, color.to_mq_color(), *color == picker.working);
        if ctx.mouse.clicked(&r) {
            picker.set_working(*color);
            picker.input_focused = false;
        }
    }

    let rows = DEFAULT_PALETTE.len().div_ceil(PALETTE_COLS) as f32;
    let mut y = body.y + rows * (SWATCH_SIZE + SWATCH_GAP) + 4.0;

    // Channel sliders
    let channels = [("R", picker.working.r), ("G", picker.working.g), ("B", picker.working.b)];
    let mut channel_values = [picker.working.r, picker.working.g, picker.working.b];
    for (i, (name, value)) in channels.iter().enumerate() {
        draw_text(name, body.x, (y + 14.0).round(), 14.0, TEXT_COLOR);
        draw_text(&format!("{:3}", value), body.right() - 26.0, (y + 14.0).round(), 14.0, TEXT_COLOR);
        let slider_rect = Rect::new(body.x + 22.0, y, body.w - 60.0, 20.0);
        if let Some(v) = draw_slider(ctx, slider_rect, *value as u32, 0, 255) {
            channel_values[i] = v as u8;
        }
        y += 26.0;
    }
    let from_sliders = Rgb::new(channel_values[0], channel_values[1], channel_values[2]);
    if from_sliders != picker.working {
        picker.set_working(from_sliders);
    }

    // Old / new preview
    y += 4.0;
    let old_rect = Rect::new(body.x, y, 40.0, 28.0);
    let new_rect = Rect::new(body.x + 40.0, y, 40.0, 28.0);
    draw_swatch(old_rect, picker.original.to_mq_color(), false);
    let shown = if picker.input_focused { picker.preview() } else { picker.working };
    draw_swatch(new_rect, shown.to_mq_color(), false);

    // Text field
    let field = Rect::new(body.x + 92.0, y, body.w - 92.0, 28.0);
    let field_bg = if picker.input_focused { WHITE } else { Color::from_rgba(238, 238, 240, 255) };
    draw_rectangle(field.x, field.y, field.w, field.h, field_bg);
    let border = if picker.input_focused { crate::ui::ACCENT_COLOR } else { Color::from_rgba(150, 150, 155, 255) };
    draw_rectangle_lines(field.x, field.y, field.w, field.h, 1.0, border);
    let caret = if picker.input_focused && (get_time() * 2.0) as i64 % 2 == 0 { "|" } else { "" };
    draw_text(&format!("{}{}", picker.input, caret), (field.x + 6.0).round(), (field.y + 19.0).round(), 16.0, TEXT_COLOR);

    if ctx.mouse.left_pressed {
        picker.input_focused = ctx.mouse.inside(&field);
    }

    // Drain typed chars even when unfocused so they don't pile up for later
    while let Some(c) = get_char_pressed() {
        if picker.input_focused {
            picker.push_char(c);
        }
    }

    if picker.input_focused {
        if is_key_pressed(KeyCode::Backspace) {
            picker.backspace();
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            match picker.commit_input() {
                Ok(_) => picker.input_focused = false,
                Err(e) => action = PickerAction::InvalidInput(format!("'{}': {}", picker.input, e)),
            }
        }
    } else if is_key_pressed(KeyCode::Enter) {
        action = PickerAction::Apply(picker.working);
    }

    // Buttons
    let button_y = popup.bottom() - 40.0;
    let ok_rect = Rect::new(popup.right() - 170.0, button_y, 74.0, 28.0);
    let cancel_rect = Rect::new(popup.right() - 86.0, button_y, 74.0, 28.0);
    if text_button(ctx, ok_rect, "OK", "", true) {
        // Unsubmitted text still counts
        action = match picker.commit_input() {
            Ok(color) => PickerAction::Apply(color),
            Err(e) => PickerAction::InvalidInput(format!("'{}': {}", picker.input, e)),
        };
    }
    if text_button(ctx, cancel_rect, "Cancel", "", false) || is_key_pressed(KeyCode::Escape) {
        action = PickerAction::Cancel;
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_follows_typing() {
        let mut picker = ColorPicker::new();
        picker.open_with(Rgb::BLACK);
        picker.input.clear();
        for c in "#f0".chars() {
            picker.push_char(c);
        }
        // Incomplete hex keeps the working color
        assert_eq!(picker.preview(), Rgb::BLACK);
        picker.push_char('0');
        assert_eq!(picker.preview(), Rgb::new(255, 0, 0));
        assert_eq!(picker.working, Rgb::BLACK);
    }

    #[test]
    fn test_open_seeds_input() {
        let mut picker = ColorPicker::new();
        picker.open_with(Rgb::new(255, 128, 0));
        assert!(picker.open);
        assert_eq!(picker.input, "#ff8000");
        assert_eq!(picker.original, picker.working);
    }

    #[test]
    fn test_typed_name_commits() {
        let mut picker = ColorPicker::new();
        picker.open_with(Rgb::BLACK);
        picker.input.clear();
        for c in "Blue".chars() {
            picker.push_char(c);
        }
        assert_eq!(picker.commit_input(), Ok(Rgb::BLUE));
        assert_eq!(picker.working, Rgb::BLUE);
    }

    #[test]
    fn test_bad_input_keeps_working_color() {
        let mut picker = ColorPicker::new();
        picker.open_with(Rgb::RED);
        picker.backspace();
        assert_eq!(picker.input, "#ff000");
        assert_eq!(picker.commit_input(), Err(ColorParseError::InvalidLength));
        assert_eq!(picker.working, Rgb::RED);
    }

    #[test]
    fn test_input_length_capped() {
        let mut picker = ColorPicker::new();
        for _ in 0..40 {
            picker.push_char('a');
        }
        picker.push_char('\n');
        assert_eq!(picker.input.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_swatch_selection_updates_text() {
        let mut picker = ColorPicker::new();
        picker.open_with(Rgb::BLACK);
        picker.set_working(Rgb::new(1, 2, 3));
        assert_eq!(picker.input, "#010203");
    }
}
