//! Compute module - Grid state and the generation-stepping engine.

mod display;
mod engine;
mod grid;

pub use display::*;
pub use engine::*;
pub use grid::*;
