use super::*;

#[test]
fn memory_store_get_returns_default_when_absent() {
    let store = MemorySettingsStore::new();
    assert_eq!(store.get(KEY_PHONE, "fallback"), "fallback");
}

#[test]
fn memory_store_get_returns_default_when_empty() {
    let mut store = MemorySettingsStore::new();
    store.set(KEY_PREFIX, "");
    assert_eq!(store.get(KEY_PREFIX, "fallback"), "fallback");
}

#[test]
fn memory_store_round_trip() {
    let mut store = MemorySettingsStore::new();
    store.set(KEY_PHONE, "15551234567");
    assert_eq!(store.get(KEY_PHONE, ""), "15551234567");
}

#[test]
fn settings_load_reads_all_keys() {
    let mut store = MemorySettingsStore::new();
    store.set(KEY_PHONE, "447911123456");
    store.set(KEY_PREFIX, "Message:");
    store.set(KEY_LINK_TEXT, "Chat now");
    store.set(KEY_DISPLAY_MODE, "button_medium");

    let settings = Settings::load(&store);
    assert_eq!(settings.phone_number, "447911123456");
    assert_eq!(settings.text_prefix, "Message:");
    assert_eq!(settings.link_text, "Chat now");
    assert_eq!(settings.display_mode, DisplayMode::ButtonMedium);
}

#[test]
fn settings_load_normalizes_bogus_mode() {
    let mut store = MemorySettingsStore::new();
    store.set(KEY_DISPLAY_MODE, "marquee");
    assert_eq!(Settings::load(&store).display_mode, DisplayMode::Text);
}

#[test]
fn sanitize_text_field_strips_tags_and_collapses_whitespace() {
    assert_eq!(
        sanitize_text_field("  Ask <b>about</b>:\tthe   sale\n"),
        "Ask about: the sale"
    );
}

#[test]
fn sanitize_text_field_drops_control_chars() {
    assert_eq!(sanitize_text_field("a\u{1}b\u{7f}c"), "abc");
}

#[test]
fn apply_form_persists_valid_phone() {
    let mut store = MemorySettingsStore::new();
    let form = SettingsForm {
        phone_number: " 1 555 123 4567 ".into(),
        ..SettingsForm::default()
    };

    let notices = apply_form(&form, &mut store);
    assert!(notices.is_empty());
    assert_eq!(store.get(KEY_PHONE, ""), "15551234567");
}

#[test]
fn apply_form_invalid_phone_notice_is_non_blocking() {
    rust_i18n::set_locale("en");
    let mut store = MemorySettingsStore::new();
    store.set(KEY_PHONE, "15551234567");

    let form = SettingsForm {
        phone_number: "+1 (555) 123-4567".into(),
        text_prefix: "Message:".into(),
        link_text: "Chat".into(),
        display_mode: "button_large".into(),
    };

    let notices = apply_form(&form, &mut store);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].field, KEY_PHONE);
    assert!(notices[0].message.contains("only digits"));

    // The stored phone survives; the other fields still persisted.
    assert_eq!(store.get(KEY_PHONE, ""), "15551234567");
    assert_eq!(store.get(KEY_PREFIX, ""), "Message:");
    assert_eq!(store.get(KEY_LINK_TEXT, ""), "Chat");
    assert_eq!(store.get(KEY_DISPLAY_MODE, ""), "button_large");
}

#[test]
fn apply_form_empty_phone_clears_without_notice() {
    let mut store = MemorySettingsStore::new();
    store.set(KEY_PHONE, "15551234567");

    let form = SettingsForm::default();
    let notices = apply_form(&form, &mut store);
    assert!(notices.is_empty());
    assert_eq!(store.get(KEY_PHONE, "unset"), "unset");
}

#[test]
fn apply_form_normalizes_mode_before_storing() {
    let mut store = MemorySettingsStore::new();
    let form = SettingsForm {
        display_mode: "blink".into(),
        ..SettingsForm::default()
    };
    apply_form(&form, &mut store);
    assert_eq!(store.get(KEY_DISPLAY_MODE, ""), "text");
}

mod toml_store {
    use super::*;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::load_or_default(dir.path().join("settings.toml")).unwrap();
        assert_eq!(store.get(KEY_PHONE, "none"), "none");
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut store = TomlSettingsStore::load_or_default(&path).unwrap();
        store.set(KEY_PHONE, "447911123456");
        store.set(KEY_DISPLAY_MODE, "button_small");
        store.save().unwrap();

        let reloaded = TomlSettingsStore::load_or_default(&path).unwrap();
        assert_eq!(reloaded.get(KEY_PHONE, ""), "447911123456");
        assert_eq!(reloaded.get(KEY_DISPLAY_MODE, ""), "button_small");
        assert_eq!(reloaded.get(KEY_LINK_TEXT, "default"), "default");
    }

    #[test]
    fn unknown_key_reads_default_and_writes_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut store =
            TomlSettingsStore::load_or_default(dir.path().join("settings.toml")).unwrap();
        store.set("mystery", "value");
        assert_eq!(store.get("mystery", "default"), "default");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "phone_number = [not toml").unwrap();

        let err = TomlSettingsStore::load_or_default(&path).unwrap_err();
        assert!(matches!(err, crate::error::SettingsError::Parse(_)));
    }
}
