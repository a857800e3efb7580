//! Locale-aware translation lookup.

use std::collections::HashMap;

use super::marker::{MarkerInfo, patch_markers};

/// Mapping from locale code (e.g. `"en"`, `"ko"`) to a display string.
///
/// Keys need not be exhaustive; `"en"` is the conventional fallback key.
pub type TextMap = HashMap<String, String>;

/// Sentinel returned when no text map is supplied.
///
/// Distinct from any normal translation so callers can detect misuse.
pub const CODE_EMPTY: &str = "CODE_EMPTY";

/// Locale of last resort when the active locale has no usable entry.
const FALLBACK_LOCALE: &str = "en";

/// Translation context holding the active locale code.
///
/// The locale is an explicit per-context value rather than a process-wide
/// mutable field; callers that need a shared locale clone or share the
/// `Translator` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    /// Active locale code used for lookups.
    locale: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

impl Translator {
    /// Creates a context with the given active locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    /// Active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switches the active locale for subsequent lookups.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Looks up the display string for the active locale.
    ///
    /// Returns [`CODE_EMPTY`] when no map is supplied. A missing or empty
    /// entry for the active locale falls back to the `"en"` entry; when that
    /// is also missing the result is the empty string. A missing locale
    /// never raises an error.
    #[must_use]
    pub fn translate(&self, texts: Option<&TextMap>) -> String {
        let Some(texts) = texts else {
            return CODE_EMPTY.to_string();
        };

        texts
            .get(&self.locale)
            .filter(|text| !text.is_empty())
            .or_else(|| texts.get(FALLBACK_LOCALE))
            .cloned()
            .unwrap_or_default()
    }

    /// Like [`translate`](Self::translate), then substitutes `#key` markers
    /// from `info` into the result.
    ///
    /// When no string was found, substitution is skipped and the degraded
    /// value is returned as-is.
    #[must_use]
    pub fn translate_with(&self, texts: Option<&TextMap>, info: &MarkerInfo) -> String {
        if texts.is_none() {
            return CODE_EMPTY.to_string();
        }

        let selected = self.translate(texts);
        if selected.is_empty() {
            return selected;
        }
        patch_markers(&selected, info)
    }

    /// Shorthand for [`translate_with`](Self::translate_with).
    #[must_use]
    pub fn t(&self, texts: Option<&TextMap>, info: &MarkerInfo) -> String {
        self.translate_with(texts, info)
    }
}
