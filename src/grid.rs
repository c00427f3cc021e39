// grid.rs - Bit-packed cell buffer decoding
//
// One bit per cell, LSB-first within each byte.
// Cell (row, col) lives at bit row * width + col.

/// Linear bit index of a cell.
#[inline]
pub fn linear_index(row: u32, col: u32, width: u32) -> usize {
    debug_assert!(col < width, "column {col} outside width {width}");
    row as usize * width as usize + col as usize
}

/// State of bit `index` in a packed buffer.
///
/// Panics if `index` is past the end of `buffer`; callers keep indexes inside
/// the grid bounds.
#[inline(always)]
pub fn is_alive(buffer: &[u8], index: usize) -> bool {
    let byte = index / 8;
    let mask = 1u8 << (index % 8);
    buffer[byte] & mask != 0
}

/// Bytes needed to pack `width * height` cells.
#[inline]
pub fn buffer_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize).div_ceil(8)
}

/// Read-only view of an engine's cell buffer.
///
/// Borrows the engine, so it cannot outlive the next mutating call. Take a
/// fresh one for every draw.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> CellView<'a> {
    pub fn new(bytes: &'a [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            bytes.len(),
            buffer_len(width, height),
            "cell buffer does not match a {width}x{height} grid"
        );
        Self { bytes, width, height }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        debug_assert!(row < self.height, "row {row} outside height {}", self.height);
        is_alive(self.bytes, linear_index(row, col, self.width))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        let cells = self.width as usize * self.height as usize;
        (0..cells).filter(|&i| is_alive(self.bytes, i)).count()
    }
}
