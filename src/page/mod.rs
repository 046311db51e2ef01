//! Page helpers shared by every screen of the application.
//!
//! Each helper is independent: formatting, alert banners, clipboard copy,
//! form validity, mobile detection and Bootstrap widget wiring. None of them
//! touch the wheel widget.

pub mod alert;
pub mod clipboard;
pub mod device;
pub mod form;
pub mod format;
pub mod tooltips;

#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use alert::{
    Alert, AlertCenter, AlertHost, AlertId, AlertKind, ManualScheduler, MemoryAlertHost,
    Scheduler, TaskHandle, ALERT_DISMISS_AFTER,
};
pub use clipboard::{copy_feedback, copy_to_clipboard, ClipboardWriter, CopyDone};
pub use device::{is_mobile, MOBILE_BODY_CLASS};
pub use form::{validate_form, ValidatableForm, VALIDATED_CLASS};
pub use format::{format_currency, format_date, parse_date};
pub use tooltips::BootstrapWidget;
