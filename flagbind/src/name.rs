//! Flag name derivation from field identifiers.

use std::sync::LazyLock;

use regex::Regex;

static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(.)([A-Z][a-z]+)").unwrap_or_else(|err| panic!("invalid word pattern: {err}"))
});

static CASE_CHANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("([a-z0-9])([A-Z])").unwrap_or_else(|err| panic!("invalid case pattern: {err}"))
});

/// Converts a field identifier into a hyphenated lowercase flag name.
///
/// Words are split before each capitalised run and between a lowercase
/// letter or digit and a following capital. Underscores become hyphens so
/// `snake_case` and `CamelCase` identifiers derive the same name.
///
/// # Examples
///
/// ```
/// use flagbind::derive_flag_name;
///
/// assert_eq!(derive_flag_name("BoolFlag"), "bool-flag");
/// assert_eq!(derive_flag_name("IntFlag2"), "int-flag2");
/// assert_eq!(derive_flag_name("HTTPServer"), "http-server");
/// assert_eq!(derive_flag_name("listen_addr"), "listen-addr");
/// ```
#[must_use]
pub fn derive_flag_name(ident: &str) -> String {
    let bare = ident.strip_prefix("r#").unwrap_or(ident);
    let words = WORD_START.replace_all(bare, "${1}-${2}");
    let split = CASE_CHANGE.replace_all(&words, "${1}-${2}");
    split.to_lowercase().replace('_', "-")
}
