//! Locale-aware Routing for Armature
//!
//! Resolves routes for a target locale on top of an application router:
//!
//! - **Localized paths**: `/about` becomes `/fr/about` or the `about___fr` route
//! - **Route base names**: `about___fr` is the `about` route in any locale
//! - **Locale switching**: the current page in another locale, with
//!   per-locale params such as translated slugs
//! - **Route tables**: generate the localized records a strategy expects
//!
//! # Quick Start
//!
//! ```rust
//! use armature_i18n_routing::{
//!     MemoryRouter, RouteLocalizer, RouteRecord, RoutingOptions, StaticLocale, StaticRoute,
//!     Strategy, localize_routes,
//! };
//! use std::sync::Arc;
//!
//! let options = RoutingOptions::new("en", Strategy::PrefixExceptDefault)
//!     .with_locales(["en", "fr"]);
//! let routes = localize_routes(&[RouteRecord::new("about", "/about")], &options);
//!
//! let localizer = RouteLocalizer::new(
//!     Arc::new(MemoryRouter::with_records(routes)),
//!     Arc::new(StaticLocale::new("en")),
//!     Arc::new(StaticRoute::empty()),
//!     Arc::new(options),
//! );
//!
//! assert_eq!(localizer.locale_path("about", Some("fr")).unwrap(), "/fr/about");
//! assert_eq!(localizer.locale_path("/about", None).unwrap(), "/about");
//! ```
//!
//! # Strategies
//!
//! | Strategy                | Default locale path | Other locale path |
//! |-------------------------|---------------------|-------------------|
//! | `prefix`                | `/en/about`         | `/fr/about`       |
//! | `prefix_and_default`    | `/about`            | `/fr/about`       |
//! | `prefix_except_default` | `/about`            | `/fr/about`       |
//! | `no_prefix`             | `/about`            | `/about`          |

mod context;
mod error;
mod localize;
mod location;
mod memory;
mod name;
mod options;
mod prefix;
mod resolver;
mod route;
mod strategy;
mod switch;

pub use context::{
    CurrentRoute, DynamicParams, LocaleContext, MetaDynamicParams, RouteResolver, StaticLocale,
    StaticRoute,
};
pub use error::{NO_MATCH_CODE, RoutingError};
pub use localize::localize_routes;
pub use location::{
    NamedLocation, ParamValue, Params, PathLocation, Query, RouteLocation, RouteRef, parse_path,
    parse_query, stringify_query,
};
pub use memory::{MemoryRouter, RouteRecord};
pub use name::{NameOptions, decode_route_name, get_locale_route_name, get_route_base_name};
pub use options::{
    DynamicParamsInterceptor, FnOptions, PrefixableFn, RoutingOptions, RoutingOptionsProvider,
    SwitchPathInterceptor,
};
pub use prefix::{default_prefixable, normalize_trailing_slash};
pub use resolver::RouteLocalizer;
pub use route::{MetaValue, ResolvedRoute, RouteMeta};
pub use strategy::Strategy;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        LocaleContext, MemoryRouter, NamedLocation, PathLocation, ResolvedRoute, Result,
        RouteLocalizer, RouteRecord, RouteResolver, RoutingError, RoutingOptions, Strategy,
        localize_routes,
    };
}
