//! Flag names as the runtime derives them, for compile-time diagnostics.
//!
//! Mirrors `flagbind::derive_flag_name`; the two must agree so an error
//! names the flag the field would actually register.

use std::sync::LazyLock;

use regex::Regex;

static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(.)([A-Z][a-z]+)").unwrap_or_else(|err| panic!("invalid word pattern: {err}"))
});

static CASE_CHANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("([a-z0-9])([A-Z])").unwrap_or_else(|err| panic!("invalid case pattern: {err}"))
});

/// Hyphenated lowercase flag name for a field identifier.
pub(super) fn flag_name(ident: &str) -> String {
    let bare = ident.strip_prefix("r#").unwrap_or(ident);
    let words = WORD_START.replace_all(bare, "${1}-${2}");
    let split = CASE_CHANGE.replace_all(&words, "${1}-${2}");
    split.to_lowercase().replace('_', "-")
}
