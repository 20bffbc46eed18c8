use web_sys::Window;

use crate::persisted_store;
use matsuri_recap_core::{DebugOverrides, ViewConfig, DEBUG_OVERRIDES_KEY};

pub(crate) fn load_view_config() -> ViewConfig {
    let config = ViewConfig::default();
    let Some(raw) = persisted_store::read_item(DEBUG_OVERRIDES_KEY) else {
        return config;
    };
    match DebugOverrides::parse(&raw) {
        Some(overrides) => {
            gloo::console::log!("config: debug overrides applied");
            config.with_overrides(&overrides)
        }
        None => {
            gloo::console::warn!("config: ignoring malformed debug overrides");
            config
        }
    }
}

pub(crate) fn viewport_width(window: &Window) -> Option<f64> {
    window.inner_width().ok()?.as_f64()
}
