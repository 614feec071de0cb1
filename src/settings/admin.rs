use super::{KEY_DISPLAY_MODE, KEY_LINK_TEXT, KEY_PHONE, KEY_PREFIX, SettingsStore};
use crate::link::strip_markup;
use crate::phone::validate_phone;
use crate::render::DisplayMode;

/// Raw values submitted from the settings surface.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub phone_number: String,
    pub text_prefix: String,
    pub link_text: String,
    pub display_mode: String,
}

/// Non-blocking validation notice for one settings field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationNotice {
    pub field: &'static str,
    pub message: String,
}

/// Sanitize free text to a single plain-text line: markup stripped, control
/// characters dropped, inner whitespace runs collapsed, ends trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_markup(input);
    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;

    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if !c.is_control() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// Apply a submitted settings form to the store.
///
/// Prefix, link text and display mode always persist (sanitized/normalized).
/// The phone number persists only when it validates; a failing phone yields
/// a notice and leaves the stored number untouched, so an invalid value can
/// never cross the configuration boundary.
pub fn apply_form(form: &SettingsForm, store: &mut dyn SettingsStore) -> Vec<ValidationNotice> {
    let mut notices = Vec::new();

    match validate_phone(&form.phone_number) {
        Ok(digits) => store.set(KEY_PHONE, &digits),
        Err(_) if form.phone_number.trim().is_empty() => {
            // Clearing the number is a valid request, not a validation error.
            store.set(KEY_PHONE, "");
        }
        Err(err) => {
            tracing::warn!("settings: rejected phone number: {err}");
            notices.push(ValidationNotice {
                field: KEY_PHONE,
                message: t!("settings.invalid_phone").into_owned(),
            });
        }
    }

    store.set(KEY_PREFIX, &sanitize_text_field(&form.text_prefix));
    store.set(KEY_LINK_TEXT, &sanitize_text_field(&form.link_text));
    store.set(
        KEY_DISPLAY_MODE,
        &DisplayMode::normalize(&form.display_mode).to_string(),
    );

    notices
}
