// config.rs - View settings
//
// Deserialized from the options object handed to `start()` on wasm32;
// every field is optional there.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::render::Palette;

pub const CELL_SIZE: u32 = 12;
pub const GRID_COLOR: &str = "#CCCCCC";
pub const DEAD_COLOR: &str = "#FFFFFF";
pub const ALIVE_COLOR: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Initial grid width in cells.
    pub width: u32,
    /// Initial grid height in cells.
    pub height: u32,
    /// Cell edge in px, not counting the 1px border.
    pub cell_size: u32,
    pub grid_color: String,
    pub alive_color: String,
    pub dead_color: String,
    /// Upper bound on generations per second.
    pub target_fps: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            cell_size: CELL_SIZE,
            grid_color: GRID_COLOR.into(),
            alive_color: ALIVE_COLOR.into(),
            dead_color: DEAD_COLOR.into(),
            target_fps: 10.0,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Error::InvalidCellSize(self.cell_size));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(Error::InvalidFrameRate(self.target_fps));
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette {
            grid: self.grid_color.clone(),
            alive: self.alive_color.clone(),
            dead: self.dead_color.clone(),
        }
    }
}

/// Grid dimension typed into a control. `None` unless a positive integer.
pub fn parse_dimension(text: &str) -> Option<u32> {
    text.trim().parse().ok().filter(|&v: &u32| v > 0)
}

/// Frame rate typed into a control. `None` unless finite and positive.
pub fn parse_frame_rate(text: &str) -> Option<f64> {
    text.trim().parse().ok().filter(|v: &f64| v.is_finite() && *v > 0.0)
}
