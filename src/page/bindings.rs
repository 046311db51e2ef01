//! JavaScript exports of the page helpers (wasm32).

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

use super::alert::{AlertCenter, AlertId, AlertKind};
use super::clipboard::{copy_to_clipboard, NavigatorClipboard};
use super::dom::{apply_mobile_class, DomAlertHost, WindowScheduler};
use super::tooltips::{init_widgets, BootstrapWidget};
use crate::render::random_chart_colors;
use crate::types::ProfileTable;

thread_local! {
    static ALERTS: RefCell<AlertCenter<DomAlertHost, WindowScheduler>> =
        RefCell::new(AlertCenter::new(DomAlertHost::new(), WindowScheduler::new()));
}

fn show(message: &str, kind: AlertKind) -> Option<u64> {
    ALERTS.with(|alerts| match alerts.borrow_mut().show(message, kind) {
        Ok(AlertId(id)) => Some(id),
        Err(err) => {
            console_error!("{err}");
            None
        }
    })
}

/// Page-load setup: panic hook, mobile body class, tooltips and popovers.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() {
    console_error_panic_hook::set_once();

    match apply_mobile_class() {
        Ok(true) => console_log!("mobile layout enabled"),
        Ok(false) => {}
        Err(err) => console_error!("{err}"),
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for widget in BootstrapWidget::ALL {
        if let Err(err) = init_widgets(&document, widget) {
            console_warn!("{} wiring skipped: {err}", widget.constructor());
        }
    }
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64) -> String {
    super::format::format_currency(value)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(input: &str) -> Result<String, JsValue> {
    Ok(super::format::format_date(input)?)
}

/// Show a banner for five seconds. Returns its id for `dismissAlert`.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: &str, kind: Option<String>) -> Option<u64> {
    let kind = kind.as_deref().map(AlertKind::from_name).unwrap_or_default();
    show(message, kind)
}

/// Remove a banner now, cancelling its timer.
#[wasm_bindgen(js_name = dismissAlert)]
pub fn dismiss_alert(id: u64) -> bool {
    ALERTS.with(|alerts| alerts.borrow_mut().dismiss(AlertId(id)))
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard_js(text: &str) {
    copy_to_clipboard(&NavigatorClipboard, text, |message, kind| {
        show(message, kind);
    });
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(mut form: HtmlFormElement) -> bool {
    super::form::validate_form(&mut form)
}

#[wasm_bindgen(js_name = isMobile)]
pub fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .is_some_and(|agent| super::device::is_mobile(&agent))
}

#[wasm_bindgen(js_name = getRandomColors)]
pub fn get_random_colors(count: usize) -> Result<Vec<String>, JsValue> {
    Ok(random_chart_colors(count)?)
}

/// The builtin lottery profiles, as an array of plain objects.
#[wasm_bindgen(js_name = lotteryProfiles)]
pub fn lottery_profiles() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&ProfileTable::builtin())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
