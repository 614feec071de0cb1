#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod content;
pub mod directive;
pub mod error;
pub mod link;
pub mod phone;
pub mod render;
pub mod settings;
pub mod title;
pub mod ui;

pub use content::{ContentStore, ContextObject, StaticContent};
pub use directive::{DirectiveArgs, render_directive};
pub use error::{LinkError, Result, SettingsError, WhatsappError};
pub use link::{GeneratedLink, build_link};
pub use render::{DisplayMode, Renderer};
pub use settings::{MemorySettingsStore, Settings, SettingsStore};
pub use title::resolve_title;
