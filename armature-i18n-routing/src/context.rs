//! Collaborators the localizer calls into
//!
//! The host framework provides route matching, the active locale and the
//! current route. Simple in-process implementations are included for
//! applications that track these themselves.

use crate::{Params, ResolvedRoute, Result, RouteLocation};
use parking_lot::RwLock;

/// Resolves a route descriptor against the route table.
///
/// Returns `RoutingError::NoMatch` when no record matches a named location.
/// Path locations that match nothing may resolve to an unnamed route instead.
pub trait RouteResolver: Send + Sync {
    fn resolve(&self, location: &RouteLocation) -> Result<ResolvedRoute>;
}

/// Exposes the active locale of the translation context.
pub trait LocaleContext: Send + Sync {
    fn locale(&self) -> String;
}

/// Exposes the route currently being displayed.
pub trait CurrentRoute: Send + Sync {
    fn current_route(&self) -> Option<ResolvedRoute>;
}

/// Looks up per-locale param overrides for a route.
pub trait DynamicParams: Send + Sync {
    fn params_for(&self, route: &ResolvedRoute, locale: &str, key: &str) -> Option<Params>;
}

/// Reads overrides from `route.meta[key][locale]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaDynamicParams;

impl DynamicParams for MetaDynamicParams {
    fn params_for(&self, route: &ResolvedRoute, locale: &str, key: &str) -> Option<Params> {
        let by_locale = route.meta.get(key)?.get();
        let value = by_locale.get(locale)?;

        match serde_json::from_value::<Params>(value.clone()) {
            Ok(params) => Some(params),
            Err(e) => {
                tracing::warn!(
                    route = ?route.name,
                    locale = %locale,
                    error = %e,
                    "Ignoring malformed dynamic route params"
                );
                None
            }
        }
    }
}

/// A locale context holding a single settable locale.
#[derive(Debug, Default)]
pub struct StaticLocale {
    locale: RwLock<String>,
}

impl StaticLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: RwLock::new(locale.into()),
        }
    }

    /// Change the active locale.
    pub fn set(&self, locale: impl Into<String>) {
        *self.locale.write() = locale.into();
    }
}

impl LocaleContext for StaticLocale {
    fn locale(&self) -> String {
        self.locale.read().clone()
    }
}

/// A current-route accessor holding a settable route.
#[derive(Debug, Default)]
pub struct StaticRoute {
    route: RwLock<Option<ResolvedRoute>>,
}

impl StaticRoute {
    pub fn new(route: ResolvedRoute) -> Self {
        Self {
            route: RwLock::new(Some(route)),
        }
    }

    /// No current route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the current route.
    pub fn set(&self, route: ResolvedRoute) {
        *self.route.write() = Some(route);
    }
}

impl CurrentRoute for StaticRoute {
    fn current_route(&self) -> Option<ResolvedRoute> {
        self.route.read().clone()
    }
}
