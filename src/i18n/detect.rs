//! Locale detection and user-language resolution.

use crate::storage::{JsonStoreExt, KeyValueStore};

/// Well-known persisted key holding the user's chosen two-letter locale.
pub const LANGUAGE_CODE_KEY: &str = "language_code";

/// Ordered source of locale candidates.
///
/// Implementations list the multi-language preference list first, then any
/// single-language legacy fields, mirroring how platforms expose locales.
pub trait LocaleSource {
    /// Locale candidates in preference order.
    fn locales(&self) -> Vec<String>;
}

/// Locale source backed by the operating system settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleSource;

impl LocaleSource for SystemLocaleSource {
    fn locales(&self) -> Vec<String> {
        let mut candidates: Vec<String> = sys_locale::get_locales().collect();
        if let Some(single) = sys_locale::get_locale() {
            candidates.push(single);
        }
        candidates
    }
}

/// Normalizes a locale identifier for lookup.
///
/// Trims whitespace and converts `_` to `-` (`en_US` → `en-US`).
fn normalize(code: &str) -> String {
    code.trim().replace('_', "-")
}

/// Primary (language) subtag of a locale code.
fn primary_subtag(code: &str) -> Option<&str> {
    code.split('-').next().filter(|tag| !tag.is_empty())
}

/// Returns the first non-empty locale candidate, normalized.
///
/// `None` when the source lists nothing usable.
#[must_use]
pub fn detect_language(source: &dyn LocaleSource) -> Option<String> {
    source.locales().iter().map(|code| normalize(code)).find(|code| !code.is_empty())
}

/// Resolves the user's language code.
///
/// A previously persisted two-letter code under [`LANGUAGE_CODE_KEY`] wins;
/// otherwise detection runs and the result is reduced to its primary
/// subtag.
#[must_use]
pub fn resolve_user_language(
    source: &dyn LocaleSource,
    store: &dyn KeyValueStore,
) -> Option<String> {
    if let Some(code) = store.get::<String>(LANGUAGE_CODE_KEY)
        && code.len() == 2
    {
        tracing::debug!("Using persisted language code: {code}");
        return Some(code);
    }

    detect_language(source).as_deref().and_then(primary_subtag).map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::storage::MemoryStore;

    /// Fixed-candidate locale source for tests.
    struct FixedLocales(Vec<&'static str>);

    impl LocaleSource for FixedLocales {
        fn locales(&self) -> Vec<String> {
            self.0.iter().map(|code| (*code).to_string()).collect()
        }
    }

    #[rstest]
    fn detect_returns_first_non_empty_candidate() {
        let source = FixedLocales(vec!["", "ko-KR", "en-US"]);

        assert_that!(detect_language(&source), some(eq("ko-KR")));
    }

    #[rstest]
    fn detect_normalizes_underscores() {
        let source = FixedLocales(vec!["en_US"]);

        assert_that!(detect_language(&source), some(eq("en-US")));
    }

    #[rstest]
    fn detect_returns_none_for_empty_source() {
        let source = FixedLocales(vec![]);

        assert_that!(detect_language(&source), none());
    }

    #[rstest]
    fn resolve_prefers_persisted_code() {
        let source = FixedLocales(vec!["en-US"]);
        let store = MemoryStore::new();
        store.set(LANGUAGE_CODE_KEY, "ko").unwrap();

        assert_that!(resolve_user_language(&source, &store), some(eq("ko")));
    }

    #[rstest]
    fn resolve_ignores_persisted_code_of_wrong_length() {
        let source = FixedLocales(vec!["ja-JP"]);
        let store = MemoryStore::new();
        store.set(LANGUAGE_CODE_KEY, "korean").unwrap();

        assert_that!(resolve_user_language(&source, &store), some(eq("ja")));
    }

    #[rstest]
    fn resolve_falls_back_to_detection_primary_subtag() {
        let source = FixedLocales(vec!["ko-KR"]);
        let store = MemoryStore::new();

        assert_that!(resolve_user_language(&source, &store), some(eq("ko")));
    }

    #[rstest]
    fn resolve_returns_none_when_nothing_known() {
        let source = FixedLocales(vec![]);
        let store = MemoryStore::new();

        assert_that!(resolve_user_language(&source, &store), none());
    }
}
