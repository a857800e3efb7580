//! End-to-end flow: persisted language settings feeding translation lookup.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use serde_json::json;
use tempfile::TempDir;
use web_util_kit::i18n::{
    LANGUAGE_CODE_KEY,
    LocaleSource,
    MarkerInfo,
    resolve_user_language,
};
use web_util_kit::storage::FileStore;
use web_util_kit::{JsonStoreExt, TextMap, Translator};

/// Locale source standing in for the platform preference list.
struct PlatformLocales(Vec<String>);

impl LocaleSource for PlatformLocales {
    fn locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

fn greeting_texts() -> TextMap {
    TextMap::from([
        ("en".to_string(), "Welcome, #name".to_string()),
        ("ko".to_string(), "환영합니다, #name".to_string()),
    ])
}

#[test]
fn persisted_language_drives_translation() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("settings.json"));
    store.set(LANGUAGE_CODE_KEY, "ko").unwrap();

    let source = PlatformLocales(vec!["en-US".to_string()]);
    let language = resolve_user_language(&source, &store).unwrap();
    let translator = Translator::new(language);

    let mut info = MarkerInfo::new();
    info.insert("name".to_string(), json!("Kim"));

    assert_eq!(translator.translate_with(Some(&greeting_texts()), &info), "환영합니다, Kim");
}

#[test]
fn detection_fills_in_when_nothing_is_persisted() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("settings.json"));

    let source = PlatformLocales(vec!["ko_KR".to_string(), "en-US".to_string()]);
    let language = resolve_user_language(&source, &store).unwrap();

    assert_eq!(language, "ko");

    // Persist the resolved code the way an application shell would.
    store.set(LANGUAGE_CODE_KEY, &language).unwrap();
    let reopened = FileStore::new(store.path());
    assert_eq!(reopened.get::<String>(LANGUAGE_CODE_KEY).as_deref(), Some("ko"));
}

#[test]
fn unknown_language_falls_back_to_english() {
    let translator = Translator::new("fr");
    let info = MarkerInfo::new();

    assert_eq!(translator.translate_with(Some(&greeting_texts()), &info), "Welcome, #name");
}
