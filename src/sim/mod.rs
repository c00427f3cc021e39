// sim/ - Simulation engine contract
//
// The view layer never owns cell state. It talks to an engine through
// `Simulation` and borrows its packed buffer one draw at a time.

mod universe;

pub use universe::Universe;

use crate::grid::CellView;

/// Engine consumed by the controller.
///
/// `cells()` must always be `buffer_len(width(), height())` bytes, LSB-first,
/// indexed `row * width + col`. Any `&mut self` call may reallocate it.
pub trait Simulation {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Advance one generation.
    fn step(&mut self);

    /// Kill every cell.
    fn clear(&mut self);

    /// Flip one cell. Requires `row < height()` and `col < width()`.
    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Resize. What happens to existing cells is up to the engine.
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn cells(&self) -> &[u8];

    /// Borrow the current buffer as a checked view.
    fn view(&self) -> CellView<'_> {
        CellView::new(self.cells(), self.width(), self.height())
    }
}
