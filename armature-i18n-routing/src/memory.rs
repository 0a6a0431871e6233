//! In-memory route table
//!
//! A [`RouteResolver`] over a list of route records with `:param` path
//! patterns, for applications that keep their route table in process.

use crate::location::{parse_path, stringify_query};
use crate::{
    MetaValue, NamedLocation, ParamValue, Params, PathLocation, Query, ResolvedRoute, Result,
    RouteLocation, RouteMeta, RouteResolver, RoutingError,
};

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 8;

/// A route table entry.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub name: Option<String>,
    /// Path pattern, e.g. `/blog/:slug`
    pub path: String,
    /// Path to redirect to when matched
    pub redirect: Option<String>,
    pub meta: RouteMeta,
}

impl RouteRecord {
    /// Create a named record.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            redirect: None,
            meta: RouteMeta::new(),
        }
    }

    /// Create a record without a name.
    pub fn unnamed(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            redirect: None,
            meta: RouteMeta::new(),
        }
    }

    /// Redirect matches of this record to another path.
    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Attach a meta entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// Route table matched in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    records: Vec<RouteRecord>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router from records.
    pub fn with_records(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// Add a record to the table.
    pub fn add_route(&mut self, record: RouteRecord) {
        self.records.push(record);
    }

    /// All records in match order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    fn resolve_path(&self, loc: &PathLocation, depth: usize) -> Result<ResolvedRoute> {
        for record in &self.records {
            let Some(params) = match_path(&record.path, &loc.path) else {
                continue;
            };

            if let Some(target) = &record.redirect {
                if depth >= MAX_REDIRECTS {
                    return Err(RoutingError::Router(format!(
                        "too many redirects resolving {}",
                        loc.path
                    )));
                }
                let mut target = parse_path(target);
                if target.query.is_empty() {
                    target.query = loc.query.clone();
                }
                if target.hash.is_empty() {
                    target.hash = loc.hash.clone();
                }

                let mut resolved = self.resolve_path(&target, depth + 1)?;
                resolved.redirected_from = Some(full_path(&loc.path, &loc.query, &loc.hash));
                return Ok(resolved);
            }

            return Ok(build_route(
                record,
                loc.path.clone(),
                params,
                loc.query.clone(),
                loc.hash.clone(),
            ));
        }

        tracing::trace!(path = %loc.path, "No route record matches path");
        let mut route = ResolvedRoute::new(None, loc.path.clone());
        route.full_path = full_path(&loc.path, &loc.query, &loc.hash);
        route.query = loc.query.clone();
        route.hash = loc.hash.clone();
        Ok(route)
    }

    fn resolve_named(&self, loc: &NamedLocation) -> Result<ResolvedRoute> {
        let name = loc
            .name
            .as_deref()
            .ok_or_else(|| RoutingError::no_match("<unnamed>"))?;

        let record = self
            .records
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| RoutingError::no_match(name))?;

        let path = build_path(&record.path, &loc.params)?;

        if record.redirect.is_some() {
            let source = PathLocation {
                path,
                query: loc.query.clone(),
                hash: loc.hash.clone(),
            };
            return self.resolve_path(&source, 0);
        }

        let mut route = build_route(
            record,
            path,
            loc.params.clone(),
            loc.query.clone(),
            loc.hash.clone(),
        );
        route.state = loc.state.clone();
        Ok(route)
    }
}

impl RouteResolver for MemoryRouter {
    fn resolve(&self, location: &RouteLocation) -> Result<ResolvedRoute> {
        match location {
            RouteLocation::Path(loc) => self.resolve_path(loc, 0),
            RouteLocation::Named(loc) => self.resolve_named(loc),
        }
    }
}

fn build_route(
    record: &RouteRecord,
    path: String,
    params: Params,
    query: Query,
    hash: String,
) -> ResolvedRoute {
    ResolvedRoute {
        name: record.name.clone(),
        full_path: full_path(&path, &query, &hash),
        path,
        params,
        query,
        hash,
        meta: record.meta.clone(),
        state: None,
        redirected_from: None,
    }
}

/// Match a route path pattern against a request path.
/// Returns Some(params) if matched, None otherwise
fn match_path(pattern: &str, path: &str) -> Option<Params> {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = Params::new();

    for (pattern_part, path_part) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pattern_part.strip_prefix(':') {
            params.insert(param_name.to_string(), ParamValue::from(*path_part));
        } else if pattern_part != path_part {
            return None;
        }
    }

    Some(params)
}

/// Fill a path pattern's `:param` segments.
fn build_path(pattern: &str, params: &Params) -> Result<String> {
    let mut segments = Vec::new();

    for part in pattern.split('/').filter(|s| !s.is_empty()) {
        match part.strip_prefix(':') {
            Some(param_name) => {
                let value = params.get(param_name).ok_or_else(|| {
                    RoutingError::Router(format!(
                        "missing required param '{}' for {}",
                        param_name, pattern
                    ))
                })?;
                segments.push(value.to_segment());
            }
            None => segments.push(part.to_string()),
        }
    }

    let mut path = format!("/{}", segments.join("/"));
    if pattern.len() > 1 && pattern.ends_with('/') && !path.ends_with('/') {
        path.push('/');
    }
    Ok(path)
}

fn full_path(path: &str, query: &Query, hash: &str) -> String {
    let mut full = path.to_string();
    if !query.is_empty() {
        full.push('?');
        full.push_str(&stringify_query(query));
    }
    full.push_str(hash);
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> MemoryRouter {
        let mut router = MemoryRouter::new();
        router.add_route(RouteRecord::new("index", "/"));
        router.add_route(RouteRecord::new("about", "/about"));
        router.add_route(RouteRecord::new("post", "/post/:slug"));
        router.add_route(RouteRecord::unnamed("/legacy").with_redirect("/about"));
        router
    }

    #[test]
    fn test_match_path_with_param() {
        let params = match_path("/users/:id", "/users/123").unwrap();
        assert_eq!(params.get("id"), Some(&ParamValue::from("123")));
        assert!(match_path("/users/:id", "/posts/123").is_none());
        assert!(match_path("/", "/").is_some());
    }

    #[test]
    fn test_resolve_path() {
        let route = router()
            .resolve(&RouteLocation::Path(
                PathLocation::new("/post/hello").with_query("page", "2").with_hash("#c"),
            ))
            .unwrap();

        assert_eq!(route.name.as_deref(), Some("post"));
        assert_eq!(route.params.get("slug"), Some(&ParamValue::from("hello")));
        assert_eq!(route.full_path, "/post/hello?page=2#c");
    }

    #[test]
    fn test_resolve_unknown_path_is_unnamed() {
        let route = router()
            .resolve(&RouteLocation::Path(PathLocation::new("/nowhere")))
            .unwrap();
        assert!(route.name.is_none());
        assert_eq!(route.full_path, "/nowhere");
    }

    #[test]
    fn test_resolve_named() {
        let route = router()
            .resolve(&RouteLocation::Named(
                NamedLocation::new("post").with_param("slug", "hi"),
            ))
            .unwrap();
        assert_eq!(route.path, "/post/hi");
    }

    #[test]
    fn test_resolve_unknown_name_is_no_match() {
        let err = router()
            .resolve(&RouteLocation::Named(NamedLocation::new("missing")))
            .unwrap_err();
        assert!(err.is_no_match());

        let err = router()
            .resolve(&RouteLocation::Named(NamedLocation::unnamed()))
            .unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn test_resolve_missing_param_is_router_error() {
        let err = router()
            .resolve(&RouteLocation::Named(NamedLocation::new("post")))
            .unwrap_err();
        assert!(matches!(err, RoutingError::Router(_)));
    }

    #[test]
    fn test_resolve_redirect() {
        let route = router()
            .resolve(&RouteLocation::Path(PathLocation::new("/legacy")))
            .unwrap();
        assert_eq!(route.name.as_deref(), Some("about"));
        assert_eq!(route.redirected_from.as_deref(), Some("/legacy"));
        assert_eq!(route.link_path(), "/legacy");
    }

    #[test]
    fn test_redirect_loop_is_error() {
        let router = MemoryRouter::with_records(vec![
            RouteRecord::unnamed("/a").with_redirect("/b"),
            RouteRecord::unnamed("/b").with_redirect("/a"),
        ]);
        let err = router
            .resolve(&RouteLocation::Path(PathLocation::new("/a")))
            .unwrap_err();
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_build_path_keeps_trailing_slash() {
        let params = Params::new();
        assert_eq!(build_path("/about/", &params).unwrap(), "/about/");
        assert_eq!(build_path("/", &params).unwrap(), "/");
    }
}
