//! Drawing pad
//!
//! - Canvas panel (fixed-resolution grid scaled to fit)
//! - Toolbar: color, eraser, clear, save/open, grid overlay, pen size
//! - Color picker popup
//! - Status bar with pixel readback under the cursor

mod state;
mod layout;
mod canvas_view;
mod color_picker;

pub use state::*;
pub use layout::*;
