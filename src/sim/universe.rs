// universe.rs - Reference engine: Conway's life on a torus
//
// Cells are packed 8 per byte so the buffer can be handed to the renderer
// (or to JS through wasm memory) without conversion.

use wasm_bindgen::prelude::*;

use super::Simulation;
use crate::grid::{buffer_len, is_alive, linear_index};

#[wasm_bindgen]
pub struct Universe {
    w: u32,
    h: u32,
    cells: Vec<u8>,
    // Scratch buffer for the next generation
    next: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "universe must be at least 1x1");
        let len = buffer_len(width, height);
        Self {
            w: width,
            h: height,
            cells: vec![0; len],
            next: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    pub fn tick(&mut self) {
        self.next.fill(0);
        for row in 0..self.h {
            for col in 0..self.w {
                let idx = linear_index(row, col, self.w);
                let alive = is_alive(&self.cells, idx);
                let next = match (alive, self.live_neighbors(row, col)) {
                    (true, 2) | (true, 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
                if next {
                    self.next[idx / 8] |= 1 << (idx % 8);
                }
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        assert!(row < self.h && col < self.w, "cell ({row}, {col}) outside {}x{}", self.w, self.h);
        let idx = linear_index(row, col, self.w);
        self.cells[idx / 8] ^= 1 << (idx % 8);
    }

    /// Resize to `width` columns. All cells die.
    pub fn set_width(&mut self, width: u32) {
        assert!(width > 0, "universe width must be at least 1");
        self.w = width;
        self.reset();
    }

    /// Resize to `height` rows. All cells die.
    pub fn set_height(&mut self, height: u32) {
        assert!(height > 0, "universe height must be at least 1");
        self.h = height;
        self.reset();
    }

    // Accessors for WASM
    pub fn cells_ptr(&self) -> *const u8 { self.cells.as_ptr() }
    pub fn cells_len(&self) -> usize { self.cells.len() }
}

impl Universe {
    fn reset(&mut self) {
        let len = buffer_len(self.w, self.h);
        self.cells = vec![0; len];
        self.next = vec![0; len];
    }

    fn live_neighbors(&self, row: u32, col: u32) -> u8 {
        let mut count = 0;
        for dr in [self.h - 1, 0, 1] {
            for dc in [self.w - 1, 0, 1] {
                if dr == 0 && dc == 0 { continue; }
                let r = (row + dr) % self.h;
                let c = (col + dc) % self.w;
                count += is_alive(&self.cells, linear_index(r, c, self.w)) as u8;
            }
        }
        count
    }
}

impl Simulation for Universe {
    fn width(&self) -> u32 { self.w }
    fn height(&self) -> u32 { self.h }
    fn step(&mut self) { self.tick() }
    fn clear(&mut self) { Universe::clear(self) }
    fn toggle_cell(&mut self, row: u32, col: u32) { Universe::toggle_cell(self, row, col) }
    fn set_width(&mut self, width: u32) { Universe::set_width(self, width) }
    fn set_height(&mut self, height: u32) { Universe::set_height(self, height) }
    fn cells(&self) -> &[u8] { &self.cells }
}
