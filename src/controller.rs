// controller.rs - Session object tying engine, canvas and animation together
//
// Every UI notification maps to one named operation here. The controller
// never holds onto the engine's buffer: each draw borrows a fresh view, and
// the borrow ends before the next engine call.

use log::{debug, trace};

use crate::config::ViewConfig;
use crate::render::{DrawStats, GridRenderer, Surface};
use crate::schedule::{Cycle, Phase, Scheduler};
use crate::sim::Simulation;

/// Host services outside the canvas: a wall-clock timer and the play/pause
/// control's label.
pub trait Host {
    /// Call `Controller::on_cycle(cycle)` once `cycle.delay()` has elapsed.
    fn arm(&mut self, cycle: Cycle);

    /// Reflect `phase` on the play/pause control.
    fn show_phase(&mut self, phase: Phase);
}

pub struct Controller<E, S, H> {
    engine: E,
    surface: S,
    host: H,
    renderer: GridRenderer,
    scheduler: Scheduler,
}

impl<E: Simulation, S: Surface, H: Host> Controller<E, S, H> {
    /// Size the canvas for `engine` and paint the first frame.
    ///
    /// `config` must already be validated.
    pub fn new(engine: E, surface: S, host: H, config: &ViewConfig) -> Self {
        let mut controller = Self {
            engine,
            surface,
            host,
            renderer: GridRenderer::from_config(config),
            scheduler: Scheduler::new(config.target_fps),
        };
        controller.host.show_phase(Phase::Paused);
        let (width, height) = (controller.engine.width(), controller.engine.height());
        controller.resize_canvas(width, height);
        controller
    }

    pub fn engine(&self) -> &E { &self.engine }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn host(&self) -> &H { &self.host }
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }
    pub fn renderer(&self) -> &GridRenderer { &self.renderer }
    pub fn scheduler(&self) -> &Scheduler { &self.scheduler }
    pub fn phase(&self) -> Phase { self.scheduler.phase() }

    /// Full repaint from the engine's current buffer.
    pub fn draw(&mut self) -> DrawStats {
        let view = self.engine.view();
        let stats = self.renderer.draw(&mut self.surface, &view);
        trace!("drew {}x{}: {} alive, {} dead", view.width(), view.height(), stats.alive, stats.dead);
        stats
    }

    /// Fit the canvas to a `width` x `height` grid, then redraw.
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        let size = self.renderer.viewport().canvas_size(width, height);
        debug!("canvas resized to {}x{} px for {width}x{height} cells", size.width, size.height);
        self.surface.set_size(size);
        self.draw();
    }

    pub fn play(&mut self) {
        if let Some(cycle) = self.scheduler.play() {
            debug!("playing at {} fps", self.scheduler.target_fps());
            self.host.show_phase(Phase::Running);
            self.host.arm(cycle);
        }
    }

    pub fn pause(&mut self) {
        if self.scheduler.pause() {
            debug!("paused");
        }
        self.host.show_phase(Phase::Paused);
    }

    pub fn on_play_pause(&mut self) {
        match self.scheduler.phase() {
            Phase::Paused => self.play(),
            Phase::Running => self.pause(),
        }
    }

    pub fn on_clear(&mut self) {
        self.engine.clear();
        self.draw();
    }

    pub fn on_fps_change(&mut self, fps: f64) {
        self.scheduler.set_target_fps(fps);
    }

    pub fn on_width_change(&mut self, width: u32) {
        assert!(width > 0, "grid width must be at least 1");
        self.pause();
        self.engine.set_width(width);
        self.refit();
    }

    pub fn on_height_change(&mut self, height: u32) {
        assert!(height > 0, "grid height must be at least 1");
        self.pause();
        self.engine.set_height(height);
        self.refit();
    }

    /// Toggle the cell under a click and redraw, running or not.
    /// Returns the `(row, col)` that was toggled.
    pub fn on_canvas_click(&mut self, client_x: f64, client_y: f64) -> (u32, u32) {
        let (width, height) = (self.engine.width(), self.engine.height());
        let (row, col) = self.renderer.viewport().pixel_to_cell(
            client_x,
            client_y,
            self.surface.bounding_rect(),
            self.surface.size(),
            width,
            height,
        );
        trace!("click ({client_x}, {client_y}) -> cell ({row}, {col})");
        self.engine.toggle_cell(row, col);
        self.draw();
        (row, col)
    }

    /// Handle a fired cycle. Returns whether it stepped the engine.
    pub fn on_cycle(&mut self, cycle: Cycle) -> bool {
        if !self.scheduler.admit(cycle) {
            trace!("dropping stale cycle (epoch {})", cycle.epoch());
            return false;
        }
        self.engine.step();
        self.draw();
        self.host.arm(self.scheduler.arm());
        true
    }

    // Resize to whatever the engine now reports
    fn refit(&mut self) {
        let (width, height) = (self.engine.width(), self.engine.height());
        self.resize_canvas(width, height);
    }
}
