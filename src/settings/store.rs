use super::{KEY_DISPLAY_MODE, KEY_LINK_TEXT, KEY_PHONE, KEY_PREFIX, SettingsStore};
use crate::error::SettingsError;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileSettings {
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    text_prefix: String,
    #[serde(default)]
    link_text: String,
    #[serde(default)]
    display_mode: String,
}

/// TOML-file-backed [`SettingsStore`] used by the CLI.
///
/// Load-or-default on open; writes are buffered in memory until [`save`] is
/// called.
///
/// [`save`]: TomlSettingsStore::save
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: FileSettings,
}

impl TomlSettingsStore {
    /// Platform config location, e.g. `~/.config/send-whatsapp/settings.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| SettingsError::Store("could not determine home directory".into()))?;
        Ok(dirs.config_dir().join("send-whatsapp").join("settings.toml"))
    }

    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            toml::from_str(&raw).map_err(|e| SettingsError::Parse(e.to_string()))?
        } else {
            FileSettings::default()
        };
        Ok(Self { path, values })
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw =
            toml::to_string_pretty(&self.values).map_err(|e| SettingsError::Parse(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str, default: &str) -> String {
        let value = match key {
            KEY_PHONE => &self.values.phone_number,
            KEY_PREFIX => &self.values.text_prefix,
            KEY_LINK_TEXT => &self.values.link_text,
            KEY_DISPLAY_MODE => &self.values.display_mode,
            _ => {
                tracing::debug!("settings: read of unknown key {key}");
                return default.to_string();
            }
        };
        if value.is_empty() {
            default.to_string()
        } else {
            value.clone()
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            KEY_PHONE => self.values.phone_number = value.to_string(),
            KEY_PREFIX => self.values.text_prefix = value.to_string(),
            KEY_LINK_TEXT => self.values.link_text = value.to_string(),
            KEY_DISPLAY_MODE => self.values.display_mode = value.to_string(),
            _ => tracing::warn!("settings: ignored write to unknown key {key}"),
        }
    }
}
