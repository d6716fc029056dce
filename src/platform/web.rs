//! Browser binding
//!
//! Exposes a [`WheelHandle`] to JavaScript. The shell calls `update(dt)` from
//! its requestAnimationFrame loop and applies `rotation()` to the wheel face.

use wasm_bindgen::prelude::*;

use crate::error::WheelError;
use crate::renderer::{SvgOptions, render_svg};
use crate::settings::WheelConfig;
use crate::wheel::{SegmentItem, SpinRng, Wheel};

fn to_js(err: WheelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. module reloaded) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Prize wheel module loaded");
}

/// A wheel owned by the JavaScript side
#[wasm_bindgen]
pub struct WheelHandle {
    wheel: Wheel,
}

#[wasm_bindgen]
impl WheelHandle {
    /// Build from JSON config (may be empty for defaults) and a JSON item array
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, items_json: &str) -> Result<WheelHandle, JsValue> {
        let config = if config_json.trim().is_empty() {
            WheelConfig::default()
        } else {
            WheelConfig::from_json(config_json).map_err(to_js)?
        };
        let items: Vec<SegmentItem> =
            serde_json::from_str(items_json).map_err(|e| to_js(WheelError::Config(e)))?;
        let seed = js_sys::Date::now() as u64;
        let wheel = Wheel::with_rng(config, &items, SpinRng::seeded(seed)).map_err(to_js)?;
        Ok(WheelHandle { wheel })
    }

    /// Spin to a random slot; returns the planned index
    pub fn spin(&mut self) -> Result<u32, JsValue> {
        let plan = self.wheel.spin().map_err(to_js)?;
        Ok(plan.target_index as u32)
    }

    /// Spin to a chosen slot; returns the target rotation
    pub fn spin_to(&mut self, index: u32) -> Result<f64, JsValue> {
        let plan = self.wheel.spin_to(index as usize).map_err(to_js)?;
        Ok(plan.target_rotation)
    }

    /// Advance by `dt` seconds; returns the settled index on the final frame, else -1
    pub fn update(&mut self, dt: f64) -> i32 {
        match self.wheel.update(dt) {
            Some(outcome) => outcome.selected_index as i32,
            None => -1,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.wheel.rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.wheel.is_spinning()
    }

    /// Slice paths as a JSON array
    pub fn slice_paths_json(&self) -> Result<String, JsValue> {
        let slices = self.wheel.slices().map_err(to_js)?;
        serde_json::to_string(&slices).map_err(|e| to_js(WheelError::Config(e)))
    }

    /// Full SVG document at the current rotation
    pub fn svg(&self) -> Result<String, JsValue> {
        let slices = self.wheel.slices().map_err(to_js)?;
        let options = SvgOptions {
            radius: self.wheel.config().outer_radius,
            ..SvgOptions::default()
        };
        Ok(render_svg(&slices, self.wheel.items(), self.wheel.rotation(), &options))
    }

    /// Register `callback(index, itemJson)`, called once per completed spin
    ///
    /// The callback runs inside `update`, while this handle is borrowed, so it
    /// must not call back into the handle: wasm-bindgen throws "recursive use
    /// of an object". To chain spins, queue the next one outside the callback
    /// (e.g. `queueMicrotask(() => handle.spin())`) or react to the index
    /// `update` returns.
    pub fn set_on_stop(&mut self, callback: js_sys::Function) {
        self.wheel.set_on_stop(move |index, item| {
            let item_json = serde_json::to_string(item).unwrap_or_default();
            if let Err(err) = callback.call2(
                &JsValue::NULL,
                &JsValue::from(index as u32),
                &JsValue::from_str(&item_json),
            ) {
                log::warn!("onStop callback threw: {:?}", err);
            }
        });
    }
}
