// render/ - Grid and cell painting
//
// Full repaint on every call: grid lines in one batched stroke, then cells
// grouped by state so the fill style changes exactly twice per frame.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::config::ViewConfig;
use crate::grid::CellView;
use crate::viewport::{BoundingRect, CanvasSize, Viewport};

/// 2D drawing target plus the canvas element it paints into.
pub trait Surface {
    fn begin_path(&mut self);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Intrinsic pixel size.
    fn size(&self) -> CanvasSize;
    fn set_size(&mut self, size: CanvasSize);

    /// Layout box in client coordinates.
    fn bounding_rect(&self) -> BoundingRect;
}

/// CSS colours used for a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub grid: String,
    pub alive: String,
    pub dead: String,
}

/// Cells painted by one `draw_cells` pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub alive: usize,
    pub dead: usize,
}

pub struct GridRenderer {
    viewport: Viewport,
    palette: Palette,
}

impl GridRenderer {
    pub fn new(viewport: Viewport, palette: Palette) -> Self {
        Self { viewport, palette }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(Viewport::new(config.cell_size), config.palette())
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    pub fn draw_grid<S: Surface>(&self, surface: &mut S, width: u32, height: u32) {
        let pitch = self.viewport.pitch() as f64;
        let right = pitch * width as f64 + 1.0;
        let bottom = pitch * height as f64 + 1.0;

        surface.begin_path();
        surface.set_stroke_style(&self.palette.grid);

        // Vertical lines
        for i in 0..=width {
            let x = i as f64 * pitch + 1.0;
            surface.move_to(x, 0.0);
            surface.line_to(x, bottom);
        }

        // Horizontal lines
        for j in 0..=height {
            let y = j as f64 * pitch + 1.0;
            surface.move_to(0.0, y);
            surface.line_to(right, y);
        }

        surface.stroke();
    }

    pub fn draw_cells<S: Surface>(&self, surface: &mut S, cells: &CellView<'_>) -> DrawStats {
        let alive = self.fill_pass(surface, cells, true, &self.palette.alive);
        let dead = self.fill_pass(surface, cells, false, &self.palette.dead);
        DrawStats { alive, dead }
    }

    /// Repaint the whole canvas from `cells`.
    pub fn draw<S: Surface>(&self, surface: &mut S, cells: &CellView<'_>) -> DrawStats {
        self.draw_grid(surface, cells.width(), cells.height());
        self.draw_cells(surface, cells)
    }

    // Fill every cell in `state` with one style
    fn fill_pass<S: Surface>(&self, surface: &mut S, cells: &CellView<'_>, state: bool, color: &str) -> usize {
        let size = self.viewport.cell_size() as f64;
        let mut filled = 0;

        surface.set_fill_style(color);
        for row in 0..cells.height() {
            for col in 0..cells.width() {
                if cells.is_alive(row, col) != state { continue; }
                let (x, y) = self.viewport.cell_origin(row, col);
                surface.fill_rect(x, y, size, size);
                filled += 1;
            }
        }
        filled
    }
}
