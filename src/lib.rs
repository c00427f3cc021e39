// ============================================================================
// LIFE CANVAS - Canvas view, animation loop and controls for a cell grid
// ============================================================================
//
// The engine owns the cells; this crate only borrows its packed buffer to
// paint it, decides when the next generation runs, and turns clicks and
// control changes into engine calls.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod render;
pub mod schedule;
pub mod sim;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ViewConfig;
pub use controller::{Controller, Host};
pub use error::{Error, Result};
pub use grid::CellView;
pub use render::{DrawStats, GridRenderer, Palette, Surface};
pub use schedule::{Cycle, Phase, Scheduler};
pub use sim::{Simulation, Universe};
pub use viewport::{BoundingRect, CanvasSize, Viewport};
