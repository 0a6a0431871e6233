//! Localized Route Resolution
//!
//! [`RouteLocalizer`] turns any route reference into the equivalent route for
//! a target locale, honoring the configured routing strategy.

use crate::context::{CurrentRoute, DynamicParams, LocaleContext, MetaDynamicParams, RouteResolver};
use crate::name::{get_locale_route_name, get_route_base_name};
use crate::options::{RoutingOptions, RoutingOptionsProvider};
use crate::prefix::{normalize_trailing_slash, prefix_path};
use crate::{NamedLocation, PathLocation, ResolvedRoute, Result, RouteLocation, RouteRef};
use std::sync::Arc;

/// Resolves localized routes against a router.
///
/// Owns the router, the translation context, the current-route accessor and
/// the options provider for its lifetime. Holds no per-call state.
#[derive(Clone)]
pub struct RouteLocalizer {
    pub(crate) router: Arc<dyn RouteResolver>,
    pub(crate) locale: Arc<dyn LocaleContext>,
    pub(crate) current: Arc<dyn CurrentRoute>,
    pub(crate) options: Arc<dyn RoutingOptionsProvider>,
    pub(crate) dynamic_params: Arc<dyn DynamicParams>,
}

impl RouteLocalizer {
    /// Create a localizer. Dynamic params are read from route meta by default.
    pub fn new(
        router: Arc<dyn RouteResolver>,
        locale: Arc<dyn LocaleContext>,
        current: Arc<dyn CurrentRoute>,
        options: Arc<dyn RoutingOptionsProvider>,
    ) -> Self {
        Self {
            router,
            locale,
            current,
            options,
            dynamic_params: Arc::new(MetaDynamicParams),
        }
    }

    /// Use a different source for per-locale dynamic params.
    pub fn with_dynamic_params(mut self, source: Arc<dyn DynamicParams>) -> Self {
        self.dynamic_params = source;
        self
    }

    /// Options in effect for this call.
    pub fn options(&self) -> Arc<RoutingOptions> {
        self.options.routing_options()
    }

    /// Resolve `route` for `locale` (or the active locale).
    ///
    /// Returns `Ok(None)` when the router reports no match. Other router
    /// errors are returned as is.
    pub fn resolve_route(
        &self,
        route: impl Into<RouteRef>,
        locale: Option<&str>,
    ) -> Result<Option<ResolvedRoute>> {
        let route = route.into();
        let options = self.options.routing_options();
        let locale = locale
            .map(str::to_string)
            .unwrap_or_else(|| self.locale.locale());

        let localized = self.localize(&route, &locale, &options);
        tracing::debug!(
            locale = %locale,
            strategy = %options.strategy,
            location = %localized.describe(),
            "Resolving localized route"
        );

        match self.router.resolve(&localized) {
            Ok(resolved) if resolved.is_named() => Ok(Some(resolved)),
            Ok(_) => {
                tracing::debug!(
                    location = %localized.describe(),
                    "Localized route matched no named record, resolving original"
                );
                self.resolve_or_none(&route.normalize())
            }
            Err(e) if e.is_no_match() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Full path of the localized route, or `""` if nothing matched.
    pub fn locale_path(&self, route: impl Into<RouteRef>, locale: Option<&str>) -> Result<String> {
        Ok(self
            .resolve_route(route, locale)?
            .map(|resolved| resolved.link_path().to_string())
            .unwrap_or_default())
    }

    /// The localized route object.
    pub fn locale_route(
        &self,
        route: impl Into<RouteRef>,
        locale: Option<&str>,
    ) -> Result<Option<ResolvedRoute>> {
        self.resolve_route(route, locale)
    }

    /// The localized location; same value as [`Self::locale_route`].
    pub fn locale_location(
        &self,
        route: impl Into<RouteRef>,
        locale: Option<&str>,
    ) -> Result<Option<ResolvedRoute>> {
        self.resolve_route(route, locale)
    }

    /// Base name of `route`, or of the current route when `None`.
    pub fn route_base_name(&self, route: Option<&ResolvedRoute>) -> Option<String> {
        let separator = self.options.routing_options().routes_name_separator.clone();
        match route {
            Some(route) => get_route_base_name(route, &separator),
            None => self
                .current
                .current_route()
                .and_then(|current| get_route_base_name(&current, &separator)),
        }
    }

    fn resolve_or_none(&self, location: &RouteLocation) -> Result<Option<ResolvedRoute>> {
        match self.router.resolve(location) {
            Ok(resolved) => Ok(Some(resolved)),
            Err(e) if e.is_no_match() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn localize(&self, route: &RouteRef, locale: &str, options: &RoutingOptions) -> RouteLocation {
        match route.normalize() {
            RouteLocation::Path(loc) if !loc.path.is_empty() => {
                self.localize_path(loc, locale, options)
            }
            RouteLocation::Path(loc) => {
                let named = NamedLocation {
                    query: loc.query,
                    hash: loc.hash,
                    ..NamedLocation::unnamed()
                };
                self.localize_named(named, locale, options)
            }
            RouteLocation::Named(loc) => self.localize_named(loc, locale, options),
        }
    }

    fn localize_path(
        &self,
        loc: PathLocation,
        locale: &str,
        options: &RoutingOptions,
    ) -> RouteLocation {
        let discovered = match self.router.resolve(&RouteLocation::Path(loc.clone())) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                // Any discovery failure counts as "no named route" for this path.
                if e.is_no_match() {
                    tracing::trace!(path = %loc.path, "Path matches no route");
                } else {
                    tracing::warn!(
                        path = %loc.path,
                        error = %e,
                        "Router failed while matching path, treating it as unnamed"
                    );
                }
                None
            }
        };

        if let Some(resolved) = discovered {
            if let Some(base) = get_route_base_name(&resolved, &options.routes_name_separator) {
                let name = get_locale_route_name(&base, locale, &options.name_options());
                tracing::trace!(path = %loc.path, route_name = %name, "Path resolved to named route");
                return RouteLocation::Named(NamedLocation {
                    name: Some(name),
                    params: resolved.params,
                    query: resolved.query,
                    hash: resolved.hash,
                    state: resolved.state,
                });
            }
        }

        let mut path = loc.path;
        if options.is_prefixable(locale) {
            path = prefix_path(locale, &path);
        }
        path = normalize_trailing_slash(&path, options.trailing_slash);

        RouteLocation::Path(PathLocation {
            path,
            query: loc.query,
            hash: loc.hash,
        })
    }

    fn localize_named(
        &self,
        mut loc: NamedLocation,
        locale: &str,
        options: &RoutingOptions,
    ) -> RouteLocation {
        let base = loc.name.take().filter(|name| !name.is_empty()).or_else(|| {
            self.current
                .current_route()
                .and_then(|current| get_route_base_name(&current, &options.routes_name_separator))
        });

        loc.name = base.map(|base| get_locale_route_name(&base, locale, &options.name_options()));
        RouteLocation::Named(loc)
    }
}

impl std::fmt::Debug for RouteLocalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteLocalizer")
            .field("locale", &self.locale.locale())
            .finish_non_exhaustive()
    }
}
