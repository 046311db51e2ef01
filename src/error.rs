//! Structured error types for wheelview.
//!
//! Widget failures (missing surface, unsupported lottery) are logged and
//! recorded on the renderer instead of being returned to the page.

/// All errors that can occur while building, rendering or formatting.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    /// The target surface (container element) does not exist.
    #[error("Container with ID {0} not found")]
    SurfaceNotFound(String),

    /// No profile is registered for the lottery type key.
    #[error("Lottery type {0} not supported")]
    UnsupportedLottery(String),

    /// A lottery profile table is malformed.
    #[error("Invalid lottery profile: {0}")]
    Profile(String),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Clipboard write failure.
    #[error("Clipboard: {0}")]
    Clipboard(String),

    /// Value could not be formatted for display.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WheelError>;

impl From<String> for WheelError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for WheelError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WheelError> for wasm_bindgen::JsValue {
    fn from(e: WheelError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Describe a `JsValue` failure as a render error.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(value: &wasm_bindgen::JsValue) -> WheelError {
    WheelError::Render(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
