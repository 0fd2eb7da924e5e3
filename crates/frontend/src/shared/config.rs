//! API endpoint resolution
//!
//! The intake endpoint comes from one of two places: a build-time
//! `API_URL` environment variable, or `window.APP_CONFIG.API_URL`
//! injected at runtime by the deploy-editable `config.js`. The build-time
//! value wins. Resolution happens once at startup; the resulting value is
//! handed to the submission client at construction.

use wasm_bindgen::JsValue;

/// Compile-time override, e.g. `API_URL=https://... trunk build`
const BUILD_TIME_API_URL: Option<&str> = option_env!("API_URL");

/// Resolve the intake endpoint. `None` means nothing non-empty was
/// configured anywhere; submission then fails before any network call.
pub fn resolve_api_url() -> Option<String> {
    BUILD_TIME_API_URL
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| runtime_api_url().and_then(non_empty))
}

/// Read `window.APP_CONFIG.API_URL` if config.js defined it
fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("APP_CONFIG")).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    js_sys::Reflect::get(&config, &JsValue::from_str("API_URL"))
        .ok()?
        .as_string()
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
