use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::dom::js_err;
use matsuri_recap_core::{Language, LANGUAGE_STORAGE_KEY};

pub(crate) fn load_language() -> Language {
    let raw = read_item(LANGUAGE_STORAGE_KEY);
    Language::from_persisted(raw.as_deref())
}

/// Best effort; a disabled or full storage never blocks the switch.
pub(crate) fn save_language(lang: Language) {
    if let Err(err) = write_item(LANGUAGE_STORAGE_KEY, lang.code()) {
        gloo::console::warn!("storage: language not saved", js_err(err));
    }
}

pub(crate) fn read_item(key: &str) -> Option<String> {
    match storage().and_then(|storage| storage.get_item(key)) {
        Ok(value) => value,
        Err(err) => {
            gloo::console::warn!("storage: read failed", key, js_err(err));
            None
        }
    }
}

fn write_item(key: &str, value: &str) -> Result<(), JsValue> {
    storage()?.set_item(key, value)
}

fn storage() -> Result<Storage, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
