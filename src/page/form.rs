//! Form validity checks.

/// Class that switches Bootstrap forms into showing validation feedback.
pub const VALIDATED_CLASS: &str = "was-validated";

/// A form whose constraints can be checked.
pub trait ValidatableForm {
    /// Whether every control satisfies its constraints.
    fn check_validity(&self) -> bool;

    /// Reveal validation feedback on the form.
    fn mark_validated(&mut self);
}

/// Returns true when `form` is valid. An invalid form is marked validated.
pub fn validate_form<F: ValidatableForm + ?Sized>(form: &mut F) -> bool {
    if form.check_validity() {
        return true;
    }
    form.mark_validated();
    false
}

#[cfg(target_arch = "wasm32")]
impl ValidatableForm for web_sys::HtmlFormElement {
    fn check_validity(&self) -> bool {
        web_sys::HtmlFormElement::check_validity(self)
    }

    fn mark_validated(&mut self) {
        if let Err(err) = self.class_list().add_1(VALIDATED_CLASS) {
            console_error!("{}", crate::error::js_error(&err));
        }
    }
}
