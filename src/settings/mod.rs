use crate::render::DisplayMode;
use std::collections::HashMap;

pub mod admin;
pub mod store;

#[cfg(test)]
mod tests;

pub use admin::{SettingsForm, ValidationNotice, apply_form, sanitize_text_field};
pub use store::TomlSettingsStore;

pub const KEY_PHONE: &str = "phone_number";
pub const KEY_PREFIX: &str = "text_prefix";
pub const KEY_LINK_TEXT: &str = "link_text";
pub const KEY_DISPLAY_MODE: &str = "display_mode";

/// Key/value settings collaborator.
///
/// The host platform owns persistence; this crate only reads the four
/// documented keys and writes through the admin surface.
pub trait SettingsStore {
    /// Stored value for `key`, or `default` when absent/empty.
    fn get(&self, key: &str, default: &str) -> String;

    fn set(&mut self, key: &str, value: &str);
}

/// Typed read-view over a [`SettingsStore`], loaded once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub phone_number: String,
    pub text_prefix: String,
    pub link_text: String,
    pub display_mode: DisplayMode,
}

impl Settings {
    /// Read the four keys. The stored mode string is normalized here, so an
    /// unrecognized value degrades to `Text` before it reaches the pipeline.
    pub fn load(store: &dyn SettingsStore) -> Self {
        Self {
            phone_number: store.get(KEY_PHONE, ""),
            text_prefix: store.get(KEY_PREFIX, ""),
            link_text: store.get(KEY_LINK_TEXT, ""),
            display_mode: DisplayMode::normalize(&store.get(KEY_DISPLAY_MODE, "")),
        }
    }
}

/// In-memory store for tests and embedders without their own backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
