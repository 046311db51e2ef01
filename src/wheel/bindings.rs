//! JavaScript-facing wheel widget (wasm32).
//!
//! ```javascript
//! const wheel = new LotteryWheel('wheel-container', { lotteryType: 'lotofacil' });
//! wheel.updateHighlightedNumbers([1, 5, 25], 'hot_numbers');
//! ```

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use super::WheelRenderer;
use crate::error::WheelError;
use crate::render::{write_svg, DomBackend};
use crate::types::{ProfileTable, Strategy, WheelConfig};

/// Options object, or defaults when absent.
///
/// Each unreadable option is logged and takes its default; the rest are kept.
fn config_from_js(options: JsValue) -> WheelConfig {
    if options.is_undefined() || options.is_null() {
        return WheelConfig::default();
    }
    let parsed = serde_wasm_bindgen::from_value::<serde_json::Value>(options)
        .map_err(|e| WheelError::Other(e.to_string()))
        .and_then(WheelConfig::from_value);
    match parsed {
        Ok((config, rejected)) => {
            for field in rejected {
                console_warn!("Invalid wheel option {field}, using its default");
            }
            config
        }
        Err(err) => {
            console_error!("Invalid wheel options, using defaults: {err}");
            WheelConfig::default()
        }
    }
}

#[wasm_bindgen]
pub struct LotteryWheel {
    inner: WheelRenderer<DomBackend>,
}

impl LotteryWheel {
    fn build(container_id: &str, config: WheelConfig, profiles: ProfileTable) -> LotteryWheel {
        LotteryWheel {
            inner: WheelRenderer::new(DomBackend::new(), Arc::new(profiles), container_id, config),
        }
    }
}

#[wasm_bindgen]
impl LotteryWheel {
    /// Draw a wheel into the element with id `container_id`.
    ///
    /// Never throws: a missing container yields an inert wheel.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> LotteryWheel {
        Self::build(container_id, config_from_js(options), ProfileTable::builtin())
    }

    /// Like the constructor, with a caller-supplied profile table.
    #[wasm_bindgen(js_name = withProfiles)]
    pub fn with_profiles(
        container_id: &str,
        options: JsValue,
        profiles: JsValue,
    ) -> Result<LotteryWheel, JsValue> {
        let profiles: ProfileTable = serde_wasm_bindgen::from_value(profiles)
            .map_err(|e| JsValue::from_str(&format!("Invalid lottery profiles: {e}")))?;
        Ok(Self::build(container_id, config_from_js(options), profiles))
    }

    #[wasm_bindgen(js_name = updateHighlightedNumbers)]
    pub fn update_highlighted_numbers(&mut self, numbers: Vec<i32>, strategy: Option<String>) {
        self.inner
            .update_highlighted_numbers(numbers, strategy.filter(|s| !s.is_empty()).map(Strategy::from));
    }

    #[wasm_bindgen(js_name = isInert)]
    pub fn is_inert(&self) -> bool {
        self.inner.is_inert()
    }

    /// Message of the last failure, if the latest draw failed.
    #[wasm_bindgen(js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.inner.last_error().map(ToString::to_string)
    }

    /// Standalone SVG markup of the wheel as currently drawn.
    pub fn svg(&self) -> Result<Option<String>, JsValue> {
        match self.inner.scene() {
            Some(scene) => Ok(Some(write_svg(scene)?)),
            None => Ok(None),
        }
    }
}

/// `initWheelVisualization(containerId, lotteryType, highlightedNumbers, strategy)`
#[wasm_bindgen(js_name = initWheelVisualization)]
pub fn init_wheel_visualization_js(
    container_id: &str,
    lottery_type: &str,
    highlighted_numbers: Vec<i32>,
    strategy: &str,
) -> LotteryWheel {
    let config = WheelConfig::new(lottery_type, highlighted_numbers, Strategy::from_key(strategy));
    LotteryWheel::build(container_id, config, ProfileTable::builtin())
}
