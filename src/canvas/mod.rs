//! Pixel canvas model
//!
//! - Fixed W x H grid of cells, independent of window size
//! - Square pen footprint measured in cells
//! - Cell <-> screen mapping re-fit to the panel every frame
//! - PNG export/import

mod grid;
mod brush;
mod view;
mod export;

pub use grid::*;
pub use brush::*;
pub use view::*;
pub use export::*;
