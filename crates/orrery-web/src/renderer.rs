use js_sys::{Float32Array, Function};
use wasm_bindgen::JsValue;

use orrery::{FrameData, Renderer};

/// Renderer that hands each frame to a JavaScript callback.
///
/// The callback receives `(instances, camera, background)`:
/// - `instances`: `Float32Array`, 8 floats per body in registry order
///   (x, y, z, rotation, radius, kind, hovered, selected)
/// - `camera`: `Float32Array` of position xyz then target xyz
/// - `background`: theme colour as 0xRRGGBB
///
/// The callback runs inside `orrery_tick` and must not call back into the
/// orrery exports; such calls are refused with a console warning. Everything
/// needed for drawing is in the arguments, and other state (events, FPS) can
/// be read once `orrery_tick` returns.
pub struct JsRenderer {
    callback: Function,
}

impl JsRenderer {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl Renderer for JsRenderer {
    fn render(&mut self, frame: &FrameData<'_>) {
        let instances = Float32Array::from(frame.instances.as_floats());
        let p = frame.camera.position;
        let t = frame.camera.target;
        let camera = Float32Array::from(&[p.x, p.y, p.z, t.x, t.y, t.z][..]);
        let background = JsValue::from(frame.theme.background());

        if let Err(e) = self.callback.call3(&JsValue::NULL, &instances, &camera, &background) {
            log::warn!("render callback failed: {:?}", e);
        }
    }
}
