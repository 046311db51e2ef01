//! Copy-to-clipboard with user feedback.
//!
//! The write completes asynchronously; the caller hands over a notifier and
//! does not wait. Success and failure each produce one banner message.

use super::alert::AlertKind;
use crate::error::Result;

pub const COPY_SUCCESS_MESSAGE: &str = "Texto copiado para a área de transferência!";
pub const COPY_FAILURE_MESSAGE: &str =
    "Não foi possível copiar o texto. Por favor, tente novamente.";

/// Completion callback of a clipboard write.
pub type CopyDone = Box<dyn FnOnce(Result<()>)>;

/// Something that can put text on the system clipboard.
pub trait ClipboardWriter {
    /// Start writing `text`; `done` runs once with the outcome.
    fn write_text(&self, text: &str, done: CopyDone);
}

/// Message and banner style reporting a copy outcome.
pub fn copy_feedback(outcome: &Result<()>) -> (&'static str, AlertKind) {
    match outcome {
        Ok(()) => (COPY_SUCCESS_MESSAGE, AlertKind::Success),
        Err(_) => (COPY_FAILURE_MESSAGE, AlertKind::Danger),
    }
}

/// Copy `text` and report the outcome through `notify`.
///
/// Failures are also logged to the console.
pub fn copy_to_clipboard<C, F>(clipboard: &C, text: &str, notify: F)
where
    C: ClipboardWriter + ?Sized,
    F: FnOnce(&'static str, AlertKind) + 'static,
{
    clipboard.write_text(
        text,
        Box::new(move |outcome| {
            if let Err(err) = &outcome {
                console_error!("Erro ao copiar texto: {err}");
            }
            let (message, kind) = copy_feedback(&outcome);
            notify(message, kind);
        }),
    );
}

#[cfg(target_arch = "wasm32")]
mod navigator {
    use wasm_bindgen_futures::JsFuture;

    use super::{ClipboardWriter, CopyDone};
    use crate::error::WheelError;

    /// `navigator.clipboard` of the current window.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NavigatorClipboard;

    impl ClipboardWriter for NavigatorClipboard {
        fn write_text(&self, text: &str, done: CopyDone) {
            let Some(window) = web_sys::window() else {
                done(Err(WheelError::Clipboard("no window".to_string())));
                return;
            };
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| {
                        WheelError::Clipboard(e.as_string().unwrap_or_else(|| format!("{e:?}")))
                    });
                done(outcome);
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use navigator::NavigatorClipboard;
