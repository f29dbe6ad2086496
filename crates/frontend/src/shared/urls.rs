//! URL helpers: web context base path and static ALM assets.

use contracts::enums::AlmKey;
use wasm_bindgen::JsValue;

/// Базовый путь веб-контекста (`window.baseUrl`).
///
/// Пустая строка, если приложение развёрнуто в корне или окна нет.
pub fn base_url() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("baseUrl"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// URL иконки платформы относительно базового пути
pub fn alm_icon_url(base: &str, alm: AlmKey) -> String {
    format!("{}/images/alm/{}", base, alm.icon_file())
}
