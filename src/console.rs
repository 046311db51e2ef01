//! Console logging.
//!
//! On wasm32 messages go to the browser console through `web_sys::console`;
//! natively they go to stderr. Use the `console_log!`, `console_warn!` and
//! `console_error!` macros rather than calling these functions directly.

/// Log an informational message.
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[wheelview] {message}");
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[wheelview] warning: {message}");
}

/// Log an error.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[wheelview] error: {message}");
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console::error(&format!($($arg)*))
    };
}
