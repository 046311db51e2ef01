//! Browser implementations of the page traits (wasm32).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::alert::{Alert, AlertHost, AlertId, Scheduler, TaskHandle};
use super::device::{is_mobile, MOBILE_BODY_CLASS};
use crate::error::{js_error, Result, WheelError};

/// z-index keeping banners above page content.
const ALERT_Z_INDEX: &str = "9999";

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WheelError::Other("no document".to_string()))
}

fn body() -> Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| WheelError::Other("no document body".to_string()))
}

/// Banners appended to `document.body`.
#[derive(Default)]
pub struct DomAlertHost {
    banners: HashMap<AlertId, Element>,
}

impl DomAlertHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertHost for DomAlertHost {
    fn insert(&mut self, alert: &Alert) -> Result<()> {
        let document = document()?;
        let banner: HtmlElement = document
            .create_element("div")
            .map_err(|e| js_error(&e))?
            .dyn_into()
            .map_err(|_| WheelError::Render("div is not an HtmlElement".to_string()))?;
        banner.set_class_name(&alert.class_name());
        banner
            .style()
            .set_property("z-index", ALERT_Z_INDEX)
            .map_err(|e| js_error(&e))?;
        banner.set_inner_html(&alert.inner_html());
        body()?.append_child(&banner).map_err(|e| js_error(&e))?;
        self.banners.insert(alert.id, banner.into());
        Ok(())
    }

    fn remove(&mut self, id: AlertId) -> bool {
        let Some(banner) = self.banners.remove(&id) else {
            return false;
        };
        // The close button may already have detached it.
        if banner.parent_node().is_none() {
            return false;
        }
        banner.remove();
        true
    }
}

/// `setTimeout` / `clearTimeout` on the current window.
///
/// Owns each callback until its timer fires or is cancelled; fired
/// callbacks are dropped on the next call into the scheduler.
#[derive(Default)]
pub struct WindowScheduler {
    timers: HashMap<i32, Closure<dyn FnMut()>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

impl WindowScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers neither fired nor cancelled yet.
    pub fn pending(&mut self) -> usize {
        self.sweep();
        self.timers.len()
    }

    fn sweep(&mut self) {
        for handle in self.fired.borrow_mut().drain(..) {
            self.timers.remove(&handle);
        }
    }
}

impl Scheduler for WindowScheduler {
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<TaskHandle> {
        self.sweep();
        let window = web_sys::window().ok_or_else(|| WheelError::Other("no window".to_string()))?;

        let own_handle = Rc::new(Cell::new(None));
        let slot = Rc::clone(&own_handle);
        let fired = Rc::clone(&self.fired);
        let callback: Closure<dyn FnMut()> = Closure::once(move || {
            task();
            if let Some(handle) = slot.get() {
                fired.borrow_mut().push(handle);
            }
        });

        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| js_error(&e))?;
        own_handle.set(Some(handle));
        self.timers.insert(handle, callback);
        Ok(TaskHandle(i64::from(handle)))
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.sweep();
        let Ok(id) = i32::try_from(handle.0) else {
            return false;
        };
        if self.timers.remove(&id).is_none() {
            return false;
        }
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(id);
        }
        true
    }
}

/// Tag the body with the mobile class when the user agent is mobile.
pub fn apply_mobile_class() -> Result<bool> {
    let window = web_sys::window().ok_or_else(|| WheelError::Other("no window".to_string()))?;
    let agent = window.navigator().user_agent().map_err(|e| js_error(&e))?;
    if !is_mobile(&agent) {
        return Ok(false);
    }
    body()?
        .class_list()
        .add_1(MOBILE_BODY_CLASS)
        .map_err(|e| js_error(&e))?;
    Ok(true)
}
