//! Locale switching for the current route
//!
//! Finds the current page's equivalent in another locale, keeping its params
//! and applying per-locale param overrides such as translated slugs.

use crate::name::get_route_base_name;
use crate::options::RoutingOptions;
use crate::{NamedLocation, ResolvedRoute, Result, RouteLocalizer};

impl RouteLocalizer {
    /// Path of the current route in `locale`, or `""` if it cannot be switched.
    pub fn switch_locale_path(&self, locale: &str) -> Result<String> {
        let options = self.options.routing_options();
        let Some(candidate) = self.switch_candidate(locale, &options) else {
            tracing::debug!(locale = %locale, "Current route has no name, cannot switch locale");
            return Ok(String::new());
        };

        let path = self.locale_path(candidate, Some(locale))?;
        Ok(options.intercept_switch_path(&path, locale))
    }

    /// The current route resolved in `locale`.
    pub fn switch_locale_route(&self, locale: &str) -> Result<Option<ResolvedRoute>> {
        let options = self.options.routing_options();
        match self.switch_candidate(locale, &options) {
            Some(candidate) => self.resolve_route(candidate, Some(locale)),
            None => Ok(None),
        }
    }

    fn switch_candidate(&self, locale: &str, options: &RoutingOptions) -> Option<NamedLocation> {
        let current = self.current.current_route()?;
        let base = get_route_base_name(&current, &options.routes_name_separator)
            .filter(|base| !base.is_empty())?;

        let overrides = options
            .dynamic_params_interceptor
            .as_ref()
            .and_then(|intercept| intercept(locale))
            .or_else(|| {
                self.dynamic_params
                    .params_for(&current, locale, &options.dynamic_route_params_key)
            })
            .unwrap_or_default();

        let mut candidate = current.to_named_location();
        candidate.name = Some(base);
        candidate.params.extend(overrides);
        Some(candidate)
    }
}
