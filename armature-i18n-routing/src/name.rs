//! Locale-qualified route names
//!
//! A localized route name is `<base><separator><suffix>`, where the suffix is
//! the locale code or, for the default locale under `prefix_and_default`, the
//! configured default-locale suffix.

use crate::{ResolvedRoute, Strategy};

/// Naming settings used to encode route names.
#[derive(Debug, Clone, Copy)]
pub struct NameOptions<'a> {
    pub default_locale: &'a str,
    pub strategy: Strategy,
    pub separator: &'a str,
    pub default_locale_suffix: &'a str,
}

/// Strip the locale suffix from a route name.
///
/// Splits on the first separator; names without one are already base names.
pub fn decode_route_name<'a>(name: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return name;
    }
    name.split_once(separator).map_or(name, |(base, _)| base)
}

/// Qualify a base route name for `locale`.
pub fn get_locale_route_name(base: &str, locale: &str, opts: &NameOptions<'_>) -> String {
    let suffix = match opts.strategy {
        Strategy::NoPrefix => return base.to_string(),
        Strategy::PrefixAndDefault if locale == opts.default_locale => opts.default_locale_suffix,
        _ => locale,
    };

    let mut name = String::with_capacity(base.len() + opts.separator.len() + suffix.len());
    name.push_str(base);
    name.push_str(opts.separator);
    name.push_str(suffix);
    name
}

/// Base name of a resolved route, or `None` for unnamed routes.
pub fn get_route_base_name(route: &ResolvedRoute, separator: &str) -> Option<String> {
    route
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(|name| decode_route_name(name, separator).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(strategy: Strategy) -> NameOptions<'static> {
        NameOptions {
            default_locale: "en",
            strategy,
            separator: "___",
            default_locale_suffix: "default",
        }
    }

    #[test]
    fn test_encode_appends_locale() {
        assert_eq!(
            get_locale_route_name("about", "fr", &opts(Strategy::Prefix)),
            "about___fr"
        );
        assert_eq!(
            get_locale_route_name("about", "en", &opts(Strategy::PrefixExceptDefault)),
            "about___en"
        );
    }

    #[test]
    fn test_encode_default_suffix_for_prefix_and_default() {
        assert_eq!(
            get_locale_route_name("about", "en", &opts(Strategy::PrefixAndDefault)),
            "about___default"
        );
        assert_eq!(
            get_locale_route_name("about", "fr", &opts(Strategy::PrefixAndDefault)),
            "about___fr"
        );
    }

    #[test]
    fn test_encode_no_prefix_keeps_base() {
        let name = get_locale_route_name("about", "fr", &opts(Strategy::NoPrefix));
        assert_eq!(name, "about");
        assert_eq!(decode_route_name(&name, "___"), "about");
    }

    #[test]
    fn test_decode_splits_on_first_separator() {
        assert_eq!(decode_route_name("about___fr___default", "___"), "about");
        assert_eq!(decode_route_name("about", "___"), "about");
        assert_eq!(decode_route_name("about___fr", ""), "about___fr");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let bases = ["index", "blog-slug", "a_b", "post"];
        for strategy in Strategy::all() {
            for base in bases {
                for locale in ["en", "fr", "zh-Hans"] {
                    let encoded = get_locale_route_name(base, locale, &opts(strategy));
                    assert_eq!(decode_route_name(&encoded, "___"), base);
                }
            }
        }
    }

    #[test]
    fn test_route_base_name() {
        let route = ResolvedRoute::new(Some("post___fr".to_string()), "/fr/post/x");
        assert_eq!(get_route_base_name(&route, "___"), Some("post".to_string()));

        let unnamed = ResolvedRoute::new(None, "/nowhere");
        assert_eq!(get_route_base_name(&unnamed, "___"), None);
    }
}
