//! Engine: testable core state plus the wasm shell that wires it to the DOM.
//!
//! `EngineCore` owns the world, camera, gesture state, and viewport, and is
//! plain Rust — the whole input→command→camera path runs in native tests.
//! `Engine` wraps the core with the page's canvas element, translates DOM
//! events into core calls, and drives the `requestAnimationFrame` redraw
//! loop. [`start`] is the single wasm export the host page calls.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, PointerEvent, WheelEvent,
    Window, console,
};

use crate::camera::Camera;
use crate::config::Config;
use crate::geom::Vec2;
use crate::input::{Button, InputState, WheelDelta, wheel_command};
use crate::render::Renderer;
use crate::world::World;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without a browser.
#[derive(Debug)]
pub struct EngineCore {
    pub world: World,
    pub camera: Camera,
    pub input: InputState,
    /// Last known pointer position, tracked even between gestures.
    pub hover: Option<Vec2>,
    pub viewport: Vec2,
    pub debug: bool,
}

impl EngineCore {
    /// Build the world from `config` and center the camera on it.
    #[must_use]
    pub fn new(config: &Config, viewport: Vec2, rng: &mut impl Rng) -> Self {
        let world = World::generate(config.world_size(), rng);
        let camera = Camera::centered_on(world.size(), viewport);
        Self {
            world,
            camera,
            input: InputState::default(),
            hover: None,
            viewport,
            debug: config.debug,
        }
    }

    pub fn on_pointer_down(&mut self, screen: Vec2, button: Button) {
        self.hover = Some(screen);
        self.input.on_pointer_down(screen, button);
    }

    pub fn on_pointer_move(&mut self, screen: Vec2) {
        self.hover = Some(screen);
        if let Some(command) = self.input.on_pointer_move(screen) {
            self.camera.apply(command);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.input.on_pointer_up();
    }

    pub fn on_wheel(&mut self, screen: Vec2, delta: WheelDelta) {
        if let Some(command) = wheel_command(screen, delta) {
            self.camera.apply(command);
        }
    }

    /// Track a viewport change. Repainting is the frame loop's job.
    pub fn set_viewport(&mut self, size: Vec2) {
        self.viewport = size;
    }
}

/// The full engine: core state bound to the page's canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    core: Rc<RefCell<EngineCore>>,
    renderer: Rc<Renderer>,
}

impl Engine {
    /// Bind a new engine to `canvas`, sizing it to the document body and
    /// generating the world.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the document, its body, or the canvas 2D context
    /// is unavailable.
    pub fn new(canvas: HtmlCanvasElement, config: &Config) -> Result<Self, JsValue> {
        let window = page_window()?;
        let document = page_document(&window)?;

        let viewport = body_size(&document)?;
        fit_canvas(&canvas, viewport);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let mut rng = config.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        let core = EngineCore::new(config, viewport, &mut rng);
        console::log_1(
            &format!(
                "hexboard: {}x{} world, zoom {:?}",
                core.world.size().width(),
                core.world.size().height(),
                core.camera.level,
            )
            .into(),
        );

        let renderer = Renderer::new(&document, ctx)?;
        Ok(Self {
            canvas,
            core: Rc::new(RefCell::new(core)),
            renderer: Rc::new(renderer),
        })
    }

    /// Attach input listeners and start the redraw loop.
    ///
    /// # Errors
    ///
    /// Returns `Err` when a listener cannot be attached or the first frame
    /// cannot be scheduled.
    pub fn run(&self) -> Result<(), JsValue> {
        let window = page_window()?;
        let document = page_document(&window)?;
        self.attach_pointer_listeners(&window)?;
        self.attach_resize_listener(&window, &document)?;
        start_frame_loop(&window, Rc::clone(&self.core), Rc::clone(&self.renderer))
    }

    fn attach_pointer_listeners(&self, window: &Window) -> Result<(), JsValue> {
        let core = Rc::clone(&self.core);
        let on_move = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            core.borrow_mut().on_pointer_move(event_point(&event));
        });
        window.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let core = Rc::clone(&self.core);
        let on_down = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            core.borrow_mut().on_pointer_down(event_point(&event), button_from_code(event.button()));
        });
        window.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref())?;
        on_down.forget();

        let core = Rc::clone(&self.core);
        let on_up = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            core.borrow_mut().on_pointer_up();
        });
        window.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())?;
        on_up.forget();

        let core = Rc::clone(&self.core);
        let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            let delta = WheelDelta { dx: event.delta_x(), dy: event.delta_y() };
            core.borrow_mut().on_wheel(event_point(&event), delta);
        });
        window.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
        on_wheel.forget();

        Ok(())
    }

    fn attach_resize_listener(&self, window: &Window, document: &Document) -> Result<(), JsValue> {
        let canvas = self.canvas.clone();
        let core = Rc::clone(&self.core);
        let document = document.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Ok(size) = body_size(&document) {
                fit_canvas(&canvas, size);
                core.borrow_mut().set_viewport(size);
            }
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
        Ok(())
    }
}

/// Entry point called by the host page: build an engine against `canvas`
/// with an optional JSON configuration object and start drawing.
///
/// # Errors
///
/// Rejects when the configuration is invalid or the page environment is
/// missing a required piece (body, 2D context).
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(text) => Config::from_json(&text).map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => Config::default(),
    };
    Engine::new(canvas, &config)?.run()
}

/// Schedule the per-frame redraw callback, re-arming itself each frame.
fn start_frame_loop(
    window: &Window,
    core: Rc<RefCell<EngineCore>>,
    renderer: Rc<Renderer>,
) -> Result<(), JsValue> {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let kickoff = Rc::clone(&handle);
    let loop_window = window.clone();

    *kickoff.borrow_mut() = Some(Closure::new(move || {
        {
            let core = core.borrow();
            if let Err(err) =
                renderer.draw(&core.world, core.camera, core.viewport, core.debug, core.hover)
            {
                console::error_2(&JsValue::from_str("frame draw failed:"), &err);
            }
        }
        if let Some(frame) = handle.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, frame) {
                console::error_2(&JsValue::from_str("failed to schedule next frame:"), &err);
            }
        }
    }));

    if let Some(frame) = kickoff.borrow().as_ref() {
        request_animation_frame(window, frame)?;
    }
    Ok(())
}

fn request_animation_frame(window: &Window, frame: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(frame.as_ref().unchecked_ref())
}

fn page_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn page_document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| JsValue::from_str("window has no document"))
}

/// The document body's content box, the size the canvas tracks.
fn body_size(document: &Document) -> Result<Vec2, JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    Ok(Vec2::new(f64::from(body.client_width()), f64::from(body.client_height())))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped client box
fn fit_canvas(canvas: &HtmlCanvasElement, size: Vec2) {
    canvas.set_width(size.x.max(0.0) as u32);
    canvas.set_height(size.y.max(0.0) as u32);
}

/// Event position relative to the event target, in CSS pixels.
fn event_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

fn button_from_code(code: i16) -> Button {
    match code {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}
