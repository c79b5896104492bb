#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated canvas backgrounds for the clock page.
//!
//! The simulation core (`variants`, `controller`) is plain Rust over the
//! [`draw::DrawContext`], [`surface::SurfaceManager`] and
//! [`scheduler::FrameScheduler`] seams, so it runs and tests on the host.
//! The browser bindings live in the wasm32-only `wasm` module.

pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod scheduler;
pub mod surface;
pub mod variants;

pub use config::{BackgroundSettings, BackgroundType, EngineConfig};
pub use controller::{Activation, LiveBackground};
pub use error::BackgroundError;
pub use geometry::Size;
pub use variants::{Simulation, VariantId};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{BackgroundSettings, EngineConfig};
    use crate::controller::{Activation, LiveBackground};
    use crate::variants::VariantId;

    mod dom;
    mod interval;
    mod render;

    pub use dom::DomSurfaces;
    pub use interval::IntervalScheduler;
    pub use render::CanvasContext;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("live wallpaper module loaded");
        Ok(())
    }

    /// Page-facing handle. The page's settings code calls `applySettings`
    /// (or `activate` directly) whenever the background choice changes.
    #[wasm_bindgen]
    pub struct LiveWallpaper {
        inner: LiveBackground<DomSurfaces, IntervalScheduler>,
    }

    #[wasm_bindgen]
    impl LiveWallpaper {
        /// `config` is an optional JSON object, e.g. `{"seed": 42}`.
        #[wasm_bindgen(constructor)]
        pub fn new(config: Option<String>) -> Result<LiveWallpaper, JsValue> {
            let mut config = EngineConfig::from_json(config.as_deref().unwrap_or(""))?;
            if config.seed.is_none() {
                config.seed = Some(entropy());
            }
            let surfaces = DomSurfaces::new()?;
            let scheduler = IntervalScheduler::new()?;
            Ok(LiveWallpaper {
                inner: LiveBackground::new(surfaces, scheduler, config),
            })
        }

        /// Run the named wallpaper. Returns `false` when the id is `custom`
        /// and the page should play its own media instead.
        pub fn activate(&mut self, variant: &str) -> Result<bool, JsValue> {
            match self.inner.activate(variant) {
                Ok(Activation::Started(_)) => Ok(true),
                Ok(Activation::External) => Ok(false),
                Err(err) => {
                    log::warn!("live wallpaper {variant:?} failed to start: {err}");
                    Err(err.into())
                }
            }
        }

        pub fn deactivate(&mut self) {
            self.inner.deactivate();
        }

        /// Feed the clock's saved settings object (as JSON).
        #[wasm_bindgen(js_name = applySettings)]
        pub fn apply_settings(&mut self, json: &str) -> Result<(), JsValue> {
            let settings = BackgroundSettings::from_json(json)?;
            self.inner.apply_settings(&settings)?;
            Ok(())
        }

        #[wasm_bindgen(js_name = activeVariant)]
        pub fn active_variant(&self) -> Option<String> {
            self.inner.active_variant().map(|v| v.id().to_owned())
        }

        #[wasm_bindgen(js_name = isExternal)]
        pub fn is_external(&self) -> bool {
            self.inner.is_external()
        }

        /// `[id, display name]` pairs for building a picker.
        pub fn variants() -> js_sys::Array {
            VariantId::ALL
                .iter()
                .map(|v| {
                    let pair = js_sys::Array::new();
                    pair.push(&JsValue::from_str(v.id()));
                    pair.push(&JsValue::from_str(v.name()));
                    JsValue::from(pair)
                })
                .collect()
        }
    }

    fn entropy() -> u64 {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = js_sys::Date::now() as u64;
        (hi << 32) ^ lo
    }
}
