//! Browser bindings for the orrery core.
//!
//! wasm-bindgen cannot export generic structs, so the runner lives in a
//! `thread_local!` and every export is a free function over it. Call
//! `orrery_init` once, then `orrery_tick` from `requestAnimationFrame`.

pub mod renderer;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use orrery::{InputEvent, OrreryConfig, OrreryError, OrreryRunner, Viewport};

pub use renderer::JsRenderer;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner<JsRenderer>>> = const { RefCell::new(None) };
}

/// Why a call could not reach the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unavailable {
    /// `orrery_init` has not run yet.
    Uninitialized,
    /// The runner is mid-tick, i.e. the render callback called back in.
    Busy,
}

impl Unavailable {
    fn message(self) -> &'static str {
        match self {
            Unavailable::Uninitialized => "orrery not initialized; call orrery_init() first",
            Unavailable::Busy => "orrery is rendering; read state after orrery_tick() returns",
        }
    }
}

/// Borrow the runner in `cell` without panicking when it is already borrowed.
fn borrow_runner<R, T>(
    cell: &RefCell<Option<R>>,
    f: impl FnOnce(&mut R) -> T,
) -> Result<T, Unavailable> {
    let mut borrow = cell.try_borrow_mut().map_err(|_| Unavailable::Busy)?;
    let runner = borrow.as_mut().ok_or(Unavailable::Uninitialized)?;
    Ok(f(runner))
}

/// Run `f` against the live runner. Calls made before `orrery_init`, or from
/// inside the render callback, are dropped with a console warning. The
/// logger may not be installed yet, so this goes straight to the console.
fn with_runner<T>(f: impl FnOnce(&mut OrreryRunner<JsRenderer>) -> T) -> Option<T> {
    RUNNER.with(|cell| match borrow_runner(cell, f) {
        Ok(value) => Some(value),
        Err(reason) => {
            web_sys::console::warn_1(&reason.message().into());
            None
        }
    })
}

fn push(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

fn to_js(err: OrreryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Create the session. `config_json` may be empty for the default solar
/// system. Fails on invalid configuration or a missing render callback.
#[wasm_bindgen]
pub fn orrery_init(
    config_json: &str,
    seed: u32,
    width: f32,
    height: f32,
    render_callback: JsValue,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let callback = render_callback
        .dyn_into::<js_sys::Function>()
        .map_err(|_| to_js(OrreryError::MissingRenderer("render callback is not a function".into())))?;

    let config = if config_json.trim().is_empty() {
        OrreryConfig::default()
    } else {
        OrreryConfig::from_json(config_json).map_err(to_js)?
    };

    let runner = OrreryRunner::new(
        config,
        JsRenderer::new(callback),
        Viewport::new(width, height),
        u64::from(seed),
    )
    .map_err(to_js)?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

/// Advance one frame. `now_ms` is the `requestAnimationFrame` timestamp.
#[wasm_bindgen]
pub fn orrery_tick(now_ms: f64) {
    with_runner(|r| r.tick(now_ms / 1000.0));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    push(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn orrery_pointer_click(x: f32, y: f32) {
    push(InputEvent::PointerClick { x, y });
}

#[wasm_bindgen]
pub fn orrery_set_speed(index: usize, value: f32) {
    push(InputEvent::SpeedChanged { index, value });
}

#[wasm_bindgen]
pub fn orrery_toggle_running() {
    push(InputEvent::ToggleRunning);
}

#[wasm_bindgen]
pub fn orrery_reset() {
    push(InputEvent::ResetRequested);
}

/// Focus body `index`, or return to the home view when `index` is negative.
#[wasm_bindgen]
pub fn orrery_focus(index: i32) {
    let target = usize::try_from(index).ok();
    push(InputEvent::FocusRequested(target));
}

#[wasm_bindgen]
pub fn orrery_top_view() {
    push(InputEvent::TopView);
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    push(InputEvent::Resize { width, height });
}

#[wasm_bindgen]
pub fn orrery_toggle_theme() {
    push(InputEvent::ToggleTheme);
}

// ---- Data accessors ----

/// Events from the latest tick as a JSON array.
#[wasm_bindgen]
pub fn orrery_events() -> String {
    with_runner(|r| r.events_json())
        .and_then(|res| res.map_err(|e| log::warn!("event serialization failed: {}", e)).ok())
        .unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances().instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instances().instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_camera_position() -> Vec<f32> {
    with_runner(|r| r.camera().position.to_array().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_camera_target() -> Vec<f32> {
    with_runner(|r| r.camera().target.to_array().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_speeds() -> Vec<f32> {
    with_runner(|r| r.bodies().speeds()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_is_running() -> bool {
    with_runner(|r| r.is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_fps() -> u32 {
    with_runner(|r| r.fps()).flatten().unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_background() -> u32 {
    with_runner(|r| r.theme().background()).unwrap_or(orrery::Theme::default().background())
}
