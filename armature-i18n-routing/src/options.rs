//! Routing Options
//!
//! Configuration consulted by the localizer on every call. Plain settings can
//! be loaded from JSON, TOML or `ARMATURE_I18N_*` environment variables; the
//! hook closures are set in code.

use crate::name::NameOptions;
use crate::prefix::default_prefixable;
use crate::{Params, Result, RoutingError, Strategy};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Replacement for the default prefix rule: `(current, default, strategy)`.
pub type PrefixableFn = Arc<dyn Fn(&str, &str, Strategy) -> bool + Send + Sync>;

/// Rewrites the path produced by a locale switch: `(path, locale) -> path`.
pub type SwitchPathInterceptor = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Supplies per-locale param overrides ahead of route metadata.
pub type DynamicParamsInterceptor = Arc<dyn Fn(&str) -> Option<Params> + Send + Sync>;

/// Locale routing configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingOptions {
    /// Locale served without prefix under the `*_default` strategies
    pub default_locale: String,
    /// Known locale codes (used when localizing route tables)
    pub locales: Vec<String>,
    pub strategy: Strategy,
    pub routes_name_separator: String,
    pub default_locale_route_name_suffix: String,
    pub trailing_slash: bool,
    /// Route meta key holding per-locale dynamic params
    pub dynamic_route_params_key: String,

    #[serde(skip)]
    pub prefixable: Option<PrefixableFn>,
    #[serde(skip)]
    pub switch_locale_path_intercepter: Option<SwitchPathInterceptor>,
    #[serde(skip)]
    pub dynamic_params_interceptor: Option<DynamicParamsInterceptor>,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            default_locale: String::new(),
            locales: Vec::new(),
            strategy: Strategy::default(),
            routes_name_separator: "___".to_string(),
            default_locale_route_name_suffix: "default".to_string(),
            trailing_slash: false,
            dynamic_route_params_key: "nuxtI18nInternal".to_string(),
            prefixable: None,
            switch_locale_path_intercepter: None,
            dynamic_params_interceptor: None,
        }
    }
}

impl fmt::Debug for RoutingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingOptions")
            .field("default_locale", &self.default_locale)
            .field("locales", &self.locales)
            .field("strategy", &self.strategy)
            .field("routes_name_separator", &self.routes_name_separator)
            .field(
                "default_locale_route_name_suffix",
                &self.default_locale_route_name_suffix,
            )
            .field("trailing_slash", &self.trailing_slash)
            .field("dynamic_route_params_key", &self.dynamic_route_params_key)
            .field("prefixable", &self.prefixable.is_some())
            .field(
                "switch_locale_path_intercepter",
                &self.switch_locale_path_intercepter.is_some(),
            )
            .field(
                "dynamic_params_interceptor",
                &self.dynamic_params_interceptor.is_some(),
            )
            .finish()
    }
}

impl RoutingOptions {
    /// Create options with a default locale and strategy.
    pub fn new(default_locale: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            default_locale: default_locale.into(),
            strategy,
            ..Self::default()
        }
    }

    /// Set the known locales
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Set the route name separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.routes_name_separator = separator.into();
        self
    }

    /// Set the default-locale route name suffix
    pub fn with_default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_locale_route_name_suffix = suffix.into();
        self
    }

    /// Enable or disable trailing slashes on localized paths
    pub fn with_trailing_slash(mut self, enabled: bool) -> Self {
        self.trailing_slash = enabled;
        self
    }

    /// Set the meta key for dynamic route params
    pub fn with_dynamic_params_key(mut self, key: impl Into<String>) -> Self {
        self.dynamic_route_params_key = key.into();
        self
    }

    /// Replace the default prefix rule
    pub fn with_prefixable<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str, Strategy) -> bool + Send + Sync + 'static,
    {
        self.prefixable = Some(Arc::new(f));
        self
    }

    /// Rewrite paths produced by locale switches
    pub fn with_switch_locale_path_intercepter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.switch_locale_path_intercepter = Some(Arc::new(f));
        self
    }

    /// Supply dynamic params ahead of route metadata
    pub fn with_dynamic_params_interceptor<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<Params> + Send + Sync + 'static,
    {
        self.dynamic_params_interceptor = Some(Arc::new(f));
        self
    }

    /// Naming settings for the route name codec.
    pub fn name_options(&self) -> NameOptions<'_> {
        NameOptions {
            default_locale: &self.default_locale,
            strategy: self.strategy,
            separator: &self.routes_name_separator,
            default_locale_suffix: &self.default_locale_route_name_suffix,
        }
    }

    /// Apply the prefix policy (or its override) for `locale`.
    pub fn is_prefixable(&self, locale: &str) -> bool {
        match &self.prefixable {
            Some(f) => f(locale, self.default_locale.as_str(), self.strategy),
            None => default_prefixable(locale, &self.default_locale, self.strategy),
        }
    }

    /// Pass a switched path through the intercepter, if any.
    pub fn intercept_switch_path(&self, path: &str, locale: &str) -> String {
        match &self.switch_locale_path_intercepter {
            Some(f) => f(path, locale),
            None => path.to_string(),
        }
    }

    /// Check settings the resolver cannot work without.
    pub fn validate(&self) -> Result<()> {
        if self.routes_name_separator.is_empty() {
            return Err(RoutingError::Config(
                "routesNameSeparator must not be empty".to_string(),
            ));
        }
        if self.default_locale_route_name_suffix.contains(&self.routes_name_separator) {
            return Err(RoutingError::Config(format!(
                "defaultLocaleRouteNameSuffix '{}' contains the separator '{}'",
                self.default_locale_route_name_suffix, self.routes_name_separator
            )));
        }
        if !self.locales.is_empty()
            && !self.default_locale.is_empty()
            && !self.locales.contains(&self.default_locale)
        {
            return Err(RoutingError::Config(format!(
                "default locale '{}' is not among the configured locales",
                self.default_locale
            )));
        }
        Ok(())
    }

    /// Load from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Load from `ARMATURE_I18N_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();

        if let Some(locale) = env_var("ARMATURE_I18N_DEFAULT_LOCALE") {
            options.default_locale = locale;
        }
        if let Some(strategy) = env_var("ARMATURE_I18N_STRATEGY") {
            options.strategy = strategy.parse()?;
        }
        if let Some(separator) = env_var("ARMATURE_I18N_SEPARATOR") {
            options.routes_name_separator = separator;
        }
        if let Some(suffix) = env_var("ARMATURE_I18N_DEFAULT_SUFFIX") {
            options.default_locale_route_name_suffix = suffix;
        }
        if let Some(flag) = env_var("ARMATURE_I18N_TRAILING_SLASH") {
            options.trailing_slash = flag == "1" || flag.eq_ignore_ascii_case("true");
        }
        if let Some(locales) = env_var("ARMATURE_I18N_LOCALES") {
            options.locales = locales
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect();
        }

        options.validate()?;
        Ok(options)
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Supplies routing options per call (e.g. per request).
pub trait RoutingOptionsProvider: Send + Sync {
    fn routing_options(&self) -> Arc<RoutingOptions>;
}

impl RoutingOptionsProvider for RoutingOptions {
    fn routing_options(&self) -> Arc<RoutingOptions> {
        Arc::new(self.clone())
    }
}

impl RoutingOptionsProvider for Arc<RoutingOptions> {
    fn routing_options(&self) -> Arc<RoutingOptions> {
        Arc::clone(self)
    }
}

/// Options computed by a closure on every call.
pub struct FnOptions<F>(pub F);

impl<F> RoutingOptionsProvider for FnOptions<F>
where
    F: Fn() -> Arc<RoutingOptions> + Send + Sync,
{
    fn routing_options(&self) -> Arc<RoutingOptions> {
        (self.0)()
    }
}
