//! Integration tests for armature-i18n-routing

use armature_i18n_routing::*;
use serde_json::json;
use std::sync::Arc;

fn base_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("index", "/"),
        RouteRecord::new("about", "/about"),
        RouteRecord::new("post", "/post/:slug")
            .with_meta("nuxtI18nInternal", json!({"fr": {"slug": "bonjour"}})),
        RouteRecord::new("home", "/home").with_redirect("/"),
    ]
}

fn setup(options: RoutingOptions, locale: &str) -> (RouteLocalizer, Arc<StaticRoute>) {
    let router = MemoryRouter::with_records(localize_routes(&base_routes(), &options));
    let current = Arc::new(StaticRoute::empty());
    let localizer = RouteLocalizer::new(
        Arc::new(router),
        Arc::new(StaticLocale::new(locale)),
        current.clone(),
        Arc::new(options),
    );
    (localizer, current)
}

fn options(strategy: Strategy) -> RoutingOptions {
    RoutingOptions::new("en", strategy).with_locales(["en", "fr"])
}

#[test]
fn test_no_prefix_keeps_names_and_paths() {
    let (loc, _) = setup(options(Strategy::NoPrefix), "en");

    let route = loc.locale_route("about", Some("fr")).unwrap().unwrap();
    assert_eq!(route.name.as_deref(), Some("about"));
    assert_eq!(loc.route_base_name(Some(&route)), Some("about".to_string()));
    assert_eq!(loc.locale_path("/about", Some("fr")).unwrap(), "/about");
}

#[test]
fn test_prefix_unmatched_path_gets_locale() {
    let opts = options(Strategy::Prefix);
    let (loc, _) = setup(opts, "en");

    assert_eq!(loc.locale_path("/about", Some("fr")).unwrap(), "/fr/about");
    assert_eq!(loc.locale_path("/about", Some("en")).unwrap(), "/en/about");
    assert_eq!(loc.locale_path("/", Some("fr")).unwrap(), "/fr");
}

#[test]
fn test_prefix_and_default_uses_default_suffix() {
    let opts = options(Strategy::PrefixAndDefault);
    assert_eq!(
        get_locale_route_name("about", "en", &opts.name_options()),
        "about___default"
    );

    let (loc, _) = setup(opts, "en");
    let route = loc.locale_route("about", None).unwrap().unwrap();
    assert_eq!(route.name.as_deref(), Some("about___default"));
    assert_eq!(loc.locale_path("about", None).unwrap(), "/about");
    assert_eq!(loc.locale_path("about", Some("fr")).unwrap(), "/fr/about");
}

#[test]
fn test_prefix_except_default_path_round_trip() {
    let (loc, _) = setup(options(Strategy::PrefixExceptDefault), "en");

    assert_eq!(loc.locale_path("/about", Some("fr")).unwrap(), "/fr/about");
    assert_eq!(loc.locale_path("/fr/about", Some("en")).unwrap(), "/about");
    assert_eq!(
        loc.locale_path("/post/hello?page=2", Some("fr")).unwrap(),
        "/fr/post/hello?page=2"
    );
}

#[test]
fn test_redirect_source_is_preferred() {
    let (loc, _) = setup(options(Strategy::PrefixExceptDefault), "en");

    let route = loc.locale_route("home", Some("fr")).unwrap().unwrap();
    assert_eq!(route.name.as_deref(), Some("index___fr"));
    assert_eq!(loc.locale_path("home", Some("fr")).unwrap(), "/fr/home");
    assert_eq!(loc.locale_path("home", Some("en")).unwrap(), "/home");
}

#[test]
fn test_switch_locale_path_applies_dynamic_params() {
    let (loc, current) = setup(options(Strategy::PrefixExceptDefault), "en");

    let route = loc.locale_route("/post/hello?page=2", Some("en")).unwrap().unwrap();
    current.set(route);

    assert_eq!(loc.switch_locale_path("fr").unwrap(), "/fr/post/bonjour?page=2");
    assert_eq!(loc.switch_locale_path("en").unwrap(), "/post/hello?page=2");
}

#[test]
fn test_no_match_yields_empty_path() {
    let (loc, _) = setup(options(Strategy::Prefix), "en");

    assert!(loc.resolve_route("contact", Some("fr")).unwrap().is_none());
    assert_eq!(loc.locale_path("contact", Some("fr")).unwrap(), "");
}

#[test]
fn test_per_call_options() {
    let router = MemoryRouter::with_records(vec![
        RouteRecord::new("about___fr", "/fr/about"),
        RouteRecord::new("about", "/about"),
    ]);
    let strategy = Arc::new(parking_lot::RwLock::new(Strategy::Prefix));
    let source = strategy.clone();
    let provider = FnOptions(move || Arc::new(RoutingOptions::new("en", *source.read())));

    let loc = RouteLocalizer::new(
        Arc::new(router),
        Arc::new(StaticLocale::new("en")),
        Arc::new(StaticRoute::empty()),
        Arc::new(provider),
    );

    assert_eq!(loc.locale_path("about", Some("fr")).unwrap(), "/fr/about");
    *strategy.write() = Strategy::NoPrefix;
    assert_eq!(loc.locale_path("about", Some("fr")).unwrap(), "/about");
}

#[test]
fn test_options_from_json_drive_localizer() {
    let opts = RoutingOptions::from_json(
        r#"{"defaultLocale":"en","locales":["en","fr"],"strategy":"prefix","trailingSlash":true}"#,
    )
    .unwrap();
    let (loc, _) = setup(opts, "en");

    assert_eq!(loc.locale_path("about", Some("fr")).unwrap(), "/fr/about/");
    assert_eq!(loc.locale_path("/about", Some("fr")).unwrap(), "/fr/about/");
}
