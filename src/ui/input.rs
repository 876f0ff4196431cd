//! Per-frame input state shared by all widgets

use super::Rect;
use macroquad::prelude::*;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    /// Sample macroquad's mouse; `last_left_down` is last frame's button state
    pub fn sample(last_left_down: bool) -> Self {
        let (x, y) = mouse_position();
        let left_down = is_mouse_button_down(MouseButton::Left);
        Self {
            x,
            y,
            left_down,
            left_pressed: left_down && !last_left_down,
            left_released: !left_down && last_left_down,
        }
    }

    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Button held inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Button went down inside a rect this frame
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[derive(Clone)]
pub struct PendingTooltip {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Widget currently being dragged (slider thumb)
    pub dragging: Option<u64>,
    /// Widget under the mouse
    pub hot: Option<u64>,
    id_counter: u64,
    /// Set by widgets while hovered, drawn last
    pub tooltip: Option<PendingTooltip>,
    /// While set, widgets drawn see a dead mouse (popup is open)
    modal_active: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            hot: None,
            id_counter: 0,
            tooltip: None,
            modal_active: false,
        }
    }

    /// Reset at start of frame
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.id_counter = 0;
        self.tooltip = None;
        self.modal_active = false;

        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    /// Block input to everything drawn until `end_modal`
    pub fn begin_modal(&mut self) {
        if !self.modal_active {
            self.modal_active = true;
            self.mouse.left_down = false;
            self.mouse.left_pressed = false;
            self.mouse.left_released = false;
        }
    }

    /// Give the popup the real mouse back
    pub fn end_modal(&mut self, real_mouse: MouseState) {
        self.modal_active = false;
        self.mouse = real_mouse;
    }

    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    pub fn set_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some(PendingTooltip {
            text: text.to_string(),
            x,
            y,
        });
    }

    /// Draw the pending tooltip (call at end of frame)
    pub fn draw_tooltip(&self) {
        if let Some(tip) = &self.tooltip {
            let padding = 6.0;
            let font_size = 13.0;
            let dims = measure_text(&tip.text, None, font_size as u16, 1.0);

            let box_w = dims.width + padding * 2.0;
            let box_h = dims.height + padding * 2.0;

            // Below-right of the cursor, flipped to stay on screen
            let mut x = tip.x + 12.0;
            let mut y = tip.y + 20.0;
            if x + box_w > screen_width() {
                x = screen_width() - box_w - 4.0;
            }
            if y + box_h > screen_height() {
                y = tip.y - box_h - 4.0;
            }

            draw_rectangle(x, y, box_w, box_h, Color::from_rgba(255, 255, 225, 245));
            draw_rectangle_lines(x, y, box_w, box_h, 1.0, Color::from_rgba(120, 120, 120, 255));
            draw_text(
                &tip.text,
                x + padding,
                y + padding + dims.height - 2.0,
                font_size,
                Color::from_rgba(30, 30, 30, 255),
            );
        }
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    /// Mark a widget hovered, unless something else is mid-drag
    pub fn set_hot(&mut self, id: u64) {
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Ctrl, or Cmd on macOS
pub fn command_down() -> bool {
    is_key_down(KeyCode::LeftControl)
        || is_key_down(KeyCode::RightControl)
        || is_key_down(KeyCode::LeftSuper)
        || is_key_down(KeyCode::RightSuper)
}

pub fn shift_down() -> bool {
    is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift)
}
