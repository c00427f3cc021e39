// web/ - Browser bindings
//
// Finds the canvas and controls by id, forwards their events to the
// controller and arms cycles with `window.setTimeout`. Controller calls
// queue at most one cycle on the host; `dispatch` arms it once the
// controller borrow is released, so timer callbacks never re-enter a borrow.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent, Window};

use crate::config::{ViewConfig, parse_dimension, parse_frame_rate};
use crate::controller::{Controller, Host};
use crate::error::{Error, Result};
use crate::render::CanvasSurface;
use crate::schedule::{Cycle, Phase};
use crate::sim::Universe;

type App = Controller<Universe, CanvasSurface, WebHost>;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub canvas: String,
    pub play_pause: String,
    pub clear: String,
    pub fps: String,
    pub width: String,
    pub height: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "game-of-life-canvas".into(),
            play_pause: "play-pause".into(),
            clear: "clear".into(),
            fps: "fps-control".into(),
            width: "board-width".into(),
            height: "board-height".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartOptions {
    #[serde(flatten)]
    pub view: ViewConfig,
    pub elements: ElementIds,
    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            elements: ElementIds::default(),
            log_level: "info".into(),
        }
    }
}

struct WebHost {
    window: Window,
    play_pause: Option<HtmlElement>,
    pending: Option<Cycle>,
}

impl Host for WebHost {
    fn arm(&mut self, cycle: Cycle) {
        self.pending = Some(cycle);
    }

    fn show_phase(&mut self, phase: Phase) {
        if let Some(button) = &self.play_pause {
            button.set_text_content(Some(phase.action_label()));
        }
    }
}

/// Handle returned to JS. The DOM listeners stay registered for the life of
/// the page.
#[wasm_bindgen]
pub struct LifeView {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl LifeView {
    pub fn play_pause(&self) { dispatch(&self.app, |app| app.on_play_pause()) }
    pub fn clear(&self) { dispatch(&self.app, |app| app.on_clear()) }
    pub fn redraw(&self) { dispatch(&self.app, |app| { app.draw(); }) }
    pub fn is_running(&self) -> bool { self.app.borrow().phase() == Phase::Running }

    pub fn set_fps(&self, fps: f64) {
        if fps.is_finite() && fps > 0.0 {
            dispatch(&self.app, |app| app.on_fps_change(fps));
        } else {
            warn!("ignoring fps {fps}");
        }
    }

    pub fn set_width(&self, width: u32) {
        if width > 0 {
            dispatch(&self.app, |app| app.on_width_change(width));
        } else {
            warn!("ignoring zero width");
        }
    }

    pub fn set_height(&self, height: u32) {
        if height > 0 {
            dispatch(&self.app, |app| app.on_height_change(height));
        } else {
            warn!("ignoring zero height");
        }
    }
}

/// Bind to the page. `options` may be `undefined` or a partial options object.
#[wasm_bindgen]
pub fn start(options: JsValue) -> std::result::Result<LifeView, JsValue> {
    console_error_panic_hook::set_once();
    let options: StartOptions = if options.is_undefined() || options.is_null() {
        StartOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| Error::Options(e.to_string()))?
    };
    let level = options.log_level.parse().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).ok();

    Ok(bind(options)?)
}

fn bind(options: StartOptions) -> Result<LifeView> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;
    let ids = &options.elements;

    let canvas: HtmlCanvasElement = element(&document, &ids.canvas, "canvas")?;
    let play_pause: Option<HtmlElement> = optional(&document, &ids.play_pause, "HTML element")?;
    let clear: Option<HtmlElement> = optional(&document, &ids.clear, "HTML element")?;
    let fps: Option<HtmlInputElement> = optional(&document, &ids.fps, "input")?;
    let width: Option<HtmlInputElement> = optional(&document, &ids.width, "input")?;
    let height: Option<HtmlInputElement> = optional(&document, &ids.height, "input")?;

    // Controls hold the initial state when present
    let mut view = options.view.clone();
    if let Some(w) = width.as_ref().and_then(parse_dim) { view.width = w; }
    if let Some(h) = height.as_ref().and_then(parse_dim) { view.height = h; }
    if let Some(f) = fps.as_ref().and_then(parse_fps) { view.target_fps = f; }
    view.validate()?;

    info!("binding {}x{} grid to #{} at {} fps", view.width, view.height, ids.canvas, view.target_fps);

    let engine = Universe::new(view.width, view.height);
    let surface = CanvasSurface::new(canvas.clone())?;
    let host = WebHost { window, play_pause: play_pause.clone(), pending: None };
    let app = Rc::new(RefCell::new(Controller::new(engine, surface, host, &view)));

    if let Some(button) = &play_pause {
        listen(button, "click", &app, |app, _| app.on_play_pause())?;
    }
    if let Some(button) = &clear {
        listen(button, "click", &app, |app, _| app.on_clear())?;
    }
    if let Some(input) = fps {
        let control = input.clone();
        listen(&input, "change", &app, move |app, _| match parse_fps(&control) {
            Some(f) => app.on_fps_change(f),
            None => warn!("ignoring fps {:?}", control.value()),
        })?;
    }
    if let Some(input) = width {
        let control = input.clone();
        listen(&input, "change", &app, move |app, _| match parse_dim(&control) {
            Some(w) => app.on_width_change(w),
            None => warn!("ignoring width {:?}", control.value()),
        })?;
    }
    if let Some(input) = height {
        let control = input.clone();
        listen(&input, "change", &app, move |app, _| match parse_dim(&control) {
            Some(h) => app.on_height_change(h),
            None => warn!("ignoring height {:?}", control.value()),
        })?;
    }
    listen(&canvas, "click", &app, |app, event| {
        if let Some(click) = event.dyn_ref::<MouseEvent>() {
            app.on_canvas_click(click.client_x() as f64, click.client_y() as f64);
        }
    })?;

    Ok(LifeView { app })
}

// Run `f` on the controller, then arm any cycle it queued
fn dispatch<R>(app: &Rc<RefCell<App>>, f: impl FnOnce(&mut App) -> R) -> R {
    let (out, pending) = {
        let mut guard = app.borrow_mut();
        let out = f(&mut guard);
        (out, guard.host_mut().pending.take())
    };
    if let Some(cycle) = pending {
        arm_timeout(app, cycle);
    }
    out
}

fn arm_timeout(app: &Rc<RefCell<App>>, cycle: Cycle) {
    let fired = Rc::clone(app);
    let callback = Closure::once_into_js(move || {
        dispatch(&fired, |app| app.on_cycle(cycle));
    });
    let window = app.borrow().host().window.clone();
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        cycle.delay_ms(),
    ) {
        warn!("setTimeout failed, animation stopped: {e:?}");
    }
}

fn listen<T, F>(target: &T, event: &str, app: &Rc<RefCell<App>>, mut handler: F) -> Result<()>
where
    T: AsRef<web_sys::EventTarget>,
    F: FnMut(&mut App, &Event) + 'static,
{
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        dispatch(&app, |app| handler(app, &e));
    });
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| Error::Js(format!("{e:?}")))?;
    closure.forget();
    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    optional(document, id, expected)?.ok_or_else(|| Error::MissingElement(id.into()))
}

fn optional<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<Option<T>> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(el) => el
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| Error::WrongElement { id: id.into(), expected }),
    }
}

fn parse_dim(input: &HtmlInputElement) -> Option<u32> {
    parse_dimension(&input.value())
}

fn parse_fps(input: &HtmlInputElement) -> Option<f64> {
    parse_frame_rate(&input.value())
}
