//! Bootstrap tooltip and popover wiring.
//!
//! Every element carrying `data-bs-toggle="tooltip"` (or `"popover"`) is
//! handed to the matching constructor of the page's global `bootstrap`
//! object.

/// Bootstrap widgets attached by `data-bs-toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapWidget {
    Tooltip,
    Popover,
}

impl BootstrapWidget {
    pub const ALL: [BootstrapWidget; 2] = [BootstrapWidget::Tooltip, BootstrapWidget::Popover];

    /// CSS selector matching the trigger elements.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Tooltip => r#"[data-bs-toggle="tooltip"]"#,
            Self::Popover => r#"[data-bs-toggle="popover"]"#,
        }
    }

    /// Constructor name on the global `bootstrap` object.
    pub const fn constructor(self) -> &'static str {
        match self {
            Self::Tooltip => "Tooltip",
            Self::Popover => "Popover",
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wiring {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::Document;

    use super::BootstrapWidget;
    use crate::error::{js_error, Result, WheelError};

    /// Construct `widget` on every trigger element. Returns how many were wired.
    pub fn init_widgets(document: &Document, widget: BootstrapWidget) -> Result<u32> {
        let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
            .map_err(|e| js_error(&e))?;
        if bootstrap.is_undefined() {
            return Err(WheelError::Other("bootstrap is not loaded".to_string()));
        }
        let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str(widget.constructor()))
            .map_err(|e| js_error(&e))?
            .dyn_into()
            .map_err(|e| js_error(&e))?;

        let triggers = document
            .query_selector_all(widget.selector())
            .map_err(|e| js_error(&e))?;
        let mut wired = 0;
        for idx in 0..triggers.length() {
            if let Some(element) = triggers.item(idx) {
                Reflect::construct(&constructor, &Array::of1(&element))
                    .map_err(|e| js_error(&e))?;
                wired += 1;
            }
        }
        Ok(wired)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wiring::init_widgets;
