//! Immediate-mode UI helpers drawn with macroquad
//!
//! Widgets are functions called every frame; the `UiContext` carries mouse
//! state and the id of whatever is being dragged.

mod input;
mod widgets;

pub use input::*;
pub use widgets::*;

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn screen(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Top strip of height `h`
    pub fn slice_top(&self, h: f32) -> Rect {
        Rect::new(self.x, self.y, self.w, h.min(self.h))
    }

    /// What's left below a top strip of height `h`
    pub fn remaining_after_top(&self, h: f32) -> Rect {
        let h = h.min(self.h);
        Rect::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Bottom strip of height `h`
    pub fn slice_bottom(&self, h: f32) -> Rect {
        let h = h.min(self.h);
        Rect::new(self.x, self.bottom() - h, self.w, h)
    }

    pub fn remaining_after_bottom(&self, h: f32) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h - h.min(self.h))
    }

    /// Shrink on all sides
    pub fn pad(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.w - amount * 2.0).max(0.0),
            (self.h - amount * 2.0).max(0.0),
        )
    }

    /// Centered rect of the given size
    pub fn centered(&self, w: f32, h: f32) -> Rect {
        Rect::new(self.x + (self.w - w) * 0.5, self.y + (self.h - h) * 0.5, w, h)
    }
}
