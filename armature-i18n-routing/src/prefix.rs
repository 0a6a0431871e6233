//! Locale prefix policy

use crate::Strategy;

/// Whether a path for `current_locale` gets a `/<locale>` prefix.
///
/// `prefix_and_default` and `prefix_except_default` both leave the default
/// locale unprefixed; `no_prefix` never prefixes.
pub fn default_prefixable(current_locale: &str, default_locale: &str, strategy: Strategy) -> bool {
    match strategy {
        Strategy::NoPrefix => false,
        Strategy::PrefixAndDefault | Strategy::PrefixExceptDefault => {
            current_locale != default_locale
        }
        Strategy::Prefix => true,
    }
}

/// Prepend `/<locale>` to a path.
pub fn prefix_path(locale: &str, path: &str) -> String {
    format!("/{}{}", locale, path)
}

/// Add or strip a trailing slash. The root path `/` is left as is.
pub fn normalize_trailing_slash(path: &str, trailing_slash: bool) -> String {
    if trailing_slash {
        if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        }
    } else if path == "/" {
        path.to_string()
    } else {
        path.strip_suffix('/').unwrap_or(path).to_string()
    }
}
