// viewport.rs - Canvas sizing and pointer-to-cell mapping
//
// Every cell is `cell_size` px square with a 1px border shared with its
// neighbours, so cells repeat every `cell_size + 1` px and the canvas carries
// one extra border pixel on the far edges.

pub const BORDER_WIDTH: u32 = 1;

/// Intrinsic (device pixel) size of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// CSS layout box of the canvas, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cell_size: u32,
}

impl Viewport {
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be at least 1px");
        Self { cell_size }
    }

    pub fn cell_size(&self) -> u32 { self.cell_size }

    /// Distance between the top-left corners of adjacent cells.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + BORDER_WIDTH
    }

    pub fn canvas_size(&self, width: u32, height: u32) -> CanvasSize {
        CanvasSize {
            width: self.pitch() * width + BORDER_WIDTH,
            height: self.pitch() * height + BORDER_WIDTH,
        }
    }

    /// Top-left pixel of a cell's fill rectangle.
    #[inline]
    pub fn cell_origin(&self, row: u32, col: u32) -> (f64, f64) {
        let pitch = self.pitch() as f64;
        (
            col as f64 * pitch + BORDER_WIDTH as f64,
            row as f64 * pitch + BORDER_WIDTH as f64,
        )
    }

    /// Map a client-space click to `(row, col)`.
    ///
    /// The layout box may be scaled relative to the canvas's intrinsic size,
    /// so client offsets are converted to canvas pixels first. The result is
    /// always inside a `width` x `height` grid: clicks on or past an edge land
    /// on the nearest edge cell.
    pub fn pixel_to_cell(
        &self,
        client_x: f64,
        client_y: f64,
        rect: BoundingRect,
        canvas: CanvasSize,
        width: u32,
        height: u32,
    ) -> (u32, u32) {
        debug_assert!(width > 0 && height > 0);
        let scale_x = scale(canvas.width, rect.width);
        let scale_y = scale(canvas.height, rect.height);

        let canvas_x = (client_x - rect.left) * scale_x;
        let canvas_y = (client_y - rect.top) * scale_y;

        let pitch = self.pitch() as f64;
        let row = clamp_cell(canvas_y / pitch, height);
        let col = clamp_cell(canvas_x / pitch, width);
        (row, col)
    }
}

// Device pixels per CSS pixel along one axis
#[inline]
fn scale(canvas_px: u32, css_px: f64) -> f64 {
    if css_px > 0.0 && css_px.is_finite() {
        canvas_px as f64 / css_px
    } else {
        1.0
    }
}

#[inline]
fn clamp_cell(pos: f64, dim: u32) -> u32 {
    let cell = pos.floor();
    if cell.is_nan() || cell <= 0.0 {
        return 0;
    }
    (cell.min((dim - 1) as f64)) as u32
}
