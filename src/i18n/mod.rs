//! Translation lookup, marker substitution, and locale detection.

pub mod detect;
pub mod marker;
pub mod translator;

pub use detect::{
    LANGUAGE_CODE_KEY,
    LocaleSource,
    SystemLocaleSource,
    detect_language,
    resolve_user_language,
};
pub use marker::{MarkerInfo, patch_markers};
pub use translator::{CODE_EMPTY, TextMap, Translator};
