//! Platform detection and the few host calls the dashboard needs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

/// Fallback viewport for hosts without a window.
const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 720.0);

/// JSON text of a global the page template injected on `window`, if any.
///
/// `undefined` and `null` both count as absent.
#[cfg(target_arch = "wasm32")]
pub fn read_global_json(name: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_global_json(_name: &str) -> Option<String> {
    None
}

/// Full page reload. The server re-injects fresh totals on the way back.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    match web_sys::window().map(|w| w.location().reload()) {
        Some(Ok(())) => {}
        Some(Err(err)) => tracing::warn!("page reload failed: {err:?}"),
        None => tracing::warn!("page reload skipped: no window"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {
    tracing::debug!("page reload requested on a host without a page");
}

/// Inner window size in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some((width, height))
        })
        .unwrap_or(DEFAULT_VIEWPORT)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> (f64, f64) {
    DEFAULT_VIEWPORT
}
