// common/ - Test doubles for driving a Controller without a browser
//
// Engine, host and surface share one journal so tests can check the order
// in which the controller talks to them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use life_canvas::{
    BoundingRect, CanvasSize, Controller, Cycle, Host, Phase, Simulation, Surface, Universe, ViewConfig,
};

pub type Journal = Rc<RefCell<Vec<Entry>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Step,
    Clear,
    Toggle(u32, u32),
    SetWidth(u32),
    SetHeight(u32),
    Phase(Phase),
    Armed(Cycle),
    Resized(CanvasSize),
}

pub struct JournalEngine {
    inner: Universe,
    journal: Journal,
}

impl JournalEngine {
    pub fn new(width: u32, height: u32, journal: &Journal) -> Self {
        Self { inner: Universe::new(width, height), journal: Rc::clone(journal) }
    }

    fn log(&self, entry: Entry) {
        self.journal.borrow_mut().push(entry);
    }
}

impl Simulation for JournalEngine {
    fn width(&self) -> u32 { Simulation::width(&self.inner) }
    fn height(&self) -> u32 { Simulation::height(&self.inner) }

    fn step(&mut self) {
        self.log(Entry::Step);
        self.inner.step();
    }

    fn clear(&mut self) {
        self.log(Entry::Clear);
        Simulation::clear(&mut self.inner);
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        self.log(Entry::Toggle(row, col));
        Simulation::toggle_cell(&mut self.inner, row, col);
    }

    fn set_width(&mut self, width: u32) {
        self.log(Entry::SetWidth(width));
        Simulation::set_width(&mut self.inner, width);
    }

    fn set_height(&mut self, height: u32) {
        self.log(Entry::SetHeight(height));
        Simulation::set_height(&mut self.inner, height);
    }

    fn cells(&self) -> &[u8] { self.inner.cells() }
}

pub struct ManualHost {
    journal: Journal,
    pub label: &'static str,
    pub armed: Vec<Cycle>,
}

impl ManualHost {
    pub fn new(journal: &Journal) -> Self {
        Self { journal: Rc::clone(journal), label: "", armed: Vec::new() }
    }
}

impl Host for ManualHost {
    fn arm(&mut self, cycle: Cycle) {
        self.journal.borrow_mut().push(Entry::Armed(cycle));
        self.armed.push(cycle);
    }

    fn show_phase(&mut self, phase: Phase) {
        self.journal.borrow_mut().push(Entry::Phase(phase));
        self.label = phase.action_label();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BeginPath,
    StrokeStyle(String),
    FillStyle(String),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillRect(f64, f64, f64, f64),
}

/// Records draw calls. The layout box is the canvas scaled by `css_scale`
/// and offset from the client origin.
pub struct RecordingSurface {
    journal: Journal,
    size: CanvasSize,
    pub css_scale: f64,
    pub ops: Vec<Op>,
}

pub const RECT_LEFT: f64 = 10.0;
pub const RECT_TOP: f64 = 20.0;

impl RecordingSurface {
    pub fn new(journal: &Journal, css_scale: f64) -> Self {
        Self { journal: Rc::clone(journal), size: CanvasSize::default(), css_scale, ops: Vec::new() }
    }

    /// Completed draws so far: each draw strokes the grid exactly once.
    pub fn draws(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Stroke).count()
    }

    /// Ops of the most recent draw.
    pub fn last_frame(&self) -> &[Op] {
        let start = self.ops.iter().rposition(|op| *op == Op::BeginPath).unwrap_or(0);
        &self.ops[start..]
    }

    /// Fill rects of the last frame painted with `color`.
    pub fn fills_in(&self, color: &str) -> Vec<(f64, f64)> {
        let mut current = String::new();
        let mut out = Vec::new();
        for op in self.last_frame() {
            match op {
                Op::FillStyle(c) => current = c.clone(),
                Op::FillRect(x, y, _, _) if current == color => out.push((*x, *y)),
                _ => {}
            }
        }
        out
    }

    /// Client coordinates of the centre of cell `(row, col)`.
    pub fn client_center(&self, cell_size: u32, row: u32, col: u32) -> (f64, f64) {
        let pitch = (cell_size + 1) as f64;
        let x = col as f64 * pitch + 1.0 + cell_size as f64 / 2.0;
        let y = row as f64 * pitch + 1.0 + cell_size as f64 / 2.0;
        (RECT_LEFT + x * self.css_scale, RECT_TOP + y * self.css_scale)
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath) }
    fn set_stroke_style(&mut self, color: &str) { self.ops.push(Op::StrokeStyle(color.into())) }
    fn set_fill_style(&mut self, color: &str) { self.ops.push(Op::FillStyle(color.into())) }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)) }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)) }
    fn stroke(&mut self) { self.ops.push(Op::Stroke) }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::FillRect(x, y, w, h)) }

    fn size(&self) -> CanvasSize { self.size }

    fn set_size(&mut self, size: CanvasSize) {
        self.journal.borrow_mut().push(Entry::Resized(size));
        self.size = size;
    }

    fn bounding_rect(&self) -> BoundingRect {
        BoundingRect {
            left: RECT_LEFT,
            top: RECT_TOP,
            width: self.size.width as f64 * self.css_scale,
            height: self.size.height as f64 * self.css_scale,
        }
    }
}

pub type TestController = Controller<JournalEngine, RecordingSurface, ManualHost>;

pub fn controller(width: u32, height: u32, config: &ViewConfig) -> (TestController, Journal) {
    controller_scaled(width, height, config, 1.0)
}

pub fn controller_scaled(width: u32, height: u32, config: &ViewConfig, css_scale: f64) -> (TestController, Journal) {
    let journal = Journal::default();
    let engine = JournalEngine::new(width, height, &journal);
    let surface = RecordingSurface::new(&journal, css_scale);
    let host = ManualHost::new(&journal);
    let controller = Controller::new(engine, surface, host, config);
    journal.borrow_mut().clear();
    (controller, journal)
}

/// Set exactly the given cells alive through the controller's engine-facing path.
pub fn seed(controller: &mut TestController, cells: &[(u32, u32)]) {
    let cell_size = controller.renderer().viewport().cell_size();
    for &(row, col) in cells {
        let (x, y) = controller.surface().client_center(cell_size, row, col);
        controller.on_canvas_click(x, y);
    }
}
