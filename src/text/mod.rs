//! String, template, and cookie helpers.

pub mod query;

pub use query::http_build_query;

use std::sync::OnceLock;

use rand::Rng;
use rand::distributions::Alphanumeric;
use regex::Regex;

/// Returns the segment at `index` after splitting `subject` by `separator`.
///
/// `None` for an empty separator, an out-of-range index, or an empty
/// segment at that position.
#[must_use]
pub fn segment<'a>(subject: &'a str, separator: &str, index: usize) -> Option<&'a str> {
    if separator.is_empty() {
        return None;
    }
    subject.split(separator).nth(index).filter(|part| !part.is_empty())
}

/// Splits by `separator`, trims each segment, and rejoins.
///
/// Empty input (or an empty separator) passes through unchanged.
#[must_use]
pub fn collapse(subject: &str, separator: &str) -> String {
    if subject.is_empty() || separator.is_empty() {
        return subject.to_string();
    }
    subject.split(separator).map(str::trim).collect::<Vec<_>>().join(separator)
}

/// Random alphanumeric string of `len` characters.
///
/// Not suitable for secrets; the source is the thread RNG.
#[must_use]
pub fn random_string(len: usize) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Removes `<...>` tag runs from `html`, leaving the text between them.
#[must_use]
#[allow(clippy::expect_used, clippy::missing_panics_doc)]
pub fn strip_tags(html: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    tags.replace_all(html, "").into_owned()
}

/// Decodes HTML entities (`&amp;`, `&#039;`, ...) to their characters.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).to_string()
}

/// Returns the named cookie's value from a `k=v; k2=v2` cookie string.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}
