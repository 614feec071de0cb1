#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::{Cli, Commands, SettingsCommands};
use send_whatsapp::settings::{
    KEY_DISPLAY_MODE, KEY_LINK_TEXT, KEY_PHONE, KEY_PREFIX, TomlSettingsStore, sanitize_text_field,
};
use send_whatsapp::ui::style;
use send_whatsapp::{
    ContextObject, DirectiveArgs, DisplayMode, Renderer, Settings, SettingsStore, StaticContent,
    build_link, render_directive,
};
use send_whatsapp::phone::validate_phone;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber")?;

    let cli = Cli::parse();
    let store = open_store()?;

    match cli.command {
        Commands::Link {
            phone,
            prefix,
            title,
        } => {
            let settings = Settings::load(&store);
            let phone = phone
                .or_else(|| non_empty(settings.phone_number.clone()))
                .unwrap_or_default();
            let phone = validate_phone(&phone).unwrap_or_default();
            let prefix = prefix.unwrap_or(settings.text_prefix);

            let url = build_link(&phone, &prefix, &title);
            if url.is_empty() {
                eprintln!("{}", style::dim(t!("cli.nothing_rendered")));
            } else {
                println!("{}", style::url(url));
            }
        }

        Commands::Render {
            phone,
            prefix,
            text,
            mode,
            content_id,
            title,
            repeat,
        } => {
            let settings = Settings::load(&store);
            let context = match title {
                Some(title) => ContextObject::ContentItem {
                    id: "demo".into(),
                    title,
                },
                None => ContextObject::None,
            };
            let content = StaticContent::new().with_context(context);
            let args = DirectiveArgs {
                phone,
                prefix,
                text,
                mode,
                content_id,
            };

            let mut renderer = Renderer::new();
            let mut rendered_any = false;
            for _ in 0..repeat {
                let html = render_directive(&settings, &content, &args, &mut renderer);
                if !html.is_empty() {
                    println!("{html}");
                    rendered_any = true;
                }
            }
            if !rendered_any {
                eprintln!("{}", style::dim(t!("cli.nothing_rendered")));
            }
        }

        Commands::Settings { settings_command } => {
            dispatch_settings(settings_command, store)?;
        }
    }

    Ok(())
}

fn open_store() -> Result<TomlSettingsStore> {
    let path = TomlSettingsStore::default_path().context("locating settings file")?;
    TomlSettingsStore::load_or_default(path).context("loading settings file")
}

fn dispatch_settings(command: SettingsCommands, mut store: TomlSettingsStore) -> Result<()> {
    match command {
        SettingsCommands::Show => {
            let settings = Settings::load(&store);
            println!("{KEY_PHONE} = {}", style::value(&settings.phone_number));
            println!("{KEY_PREFIX} = {}", style::value(&settings.text_prefix));
            println!("{KEY_LINK_TEXT} = {}", style::value(&settings.link_text));
            println!(
                "{KEY_DISPLAY_MODE} = {}",
                style::value(settings.display_mode)
            );
            println!("{}", style::dim(store.path().display()));
        }

        SettingsCommands::Set { key, value } => {
            match key.as_str() {
                KEY_PHONE => match validate_phone(&value) {
                    Ok(digits) => store.set(KEY_PHONE, &digits),
                    Err(_) => {
                        // Non-blocking by design: report and leave the stored number alone.
                        eprintln!("{}", style::yellow(t!("settings.invalid_phone")));
                        return Ok(());
                    }
                },
                KEY_PREFIX | KEY_LINK_TEXT => {
                    store.set(&key, &sanitize_text_field(&value));
                }
                KEY_DISPLAY_MODE => {
                    store.set(&key, &DisplayMode::normalize(&value).to_string());
                }
                other => {
                    eprintln!(
                        "{}",
                        style::yellow(t!("settings.unknown_key", key = other))
                    );
                    return Ok(());
                }
            }
            store.save().context("saving settings file")?;
            println!("{}", style::success(t!("settings.saved")));
        }
    }
    Ok(())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
