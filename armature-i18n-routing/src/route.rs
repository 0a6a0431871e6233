//! Resolved routes and route metadata

use crate::location::{NamedLocation, Params, Query};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A metadata value attached to a route record.
///
/// Values may be stored inline or shared behind a lock so the host can keep
/// them current (e.g. per-locale slugs loaded after the route was built).
#[derive(Debug, Clone)]
pub enum MetaValue {
    Direct(Value),
    Shared(Arc<RwLock<Value>>),
}

impl MetaValue {
    /// Wrap a value in a shared, updatable cell.
    pub fn shared(value: Value) -> Self {
        MetaValue::Shared(Arc::new(RwLock::new(value)))
    }

    /// Snapshot the current value.
    pub fn get(&self) -> Value {
        match self {
            MetaValue::Direct(value) => value.clone(),
            MetaValue::Shared(cell) => cell.read().clone(),
        }
    }
}

impl From<Value> for MetaValue {
    fn from(value: Value) -> Self {
        MetaValue::Direct(value)
    }
}

/// Route metadata keyed by meta field name.
pub type RouteMeta = HashMap<String, MetaValue>;

/// A route as returned by the router's resolve operation.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRoute {
    /// Route record name; `None` when the location matched no record
    pub name: Option<String>,
    pub path: String,
    /// Path including query string and hash
    pub full_path: String,
    pub params: Params,
    pub query: Query,
    pub hash: String,
    pub meta: RouteMeta,
    pub state: Option<Value>,
    /// Full path of the location that redirected here, if any
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// A resolved route with the given name and path.
    pub fn new(name: Option<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name,
            full_path: path.clone(),
            path,
            ..Self::default()
        }
    }

    /// Whether the router matched a named record.
    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The path links should point at, preferring the redirect source.
    pub fn link_path(&self) -> &str {
        self.redirected_from.as_deref().unwrap_or(&self.full_path)
    }

    /// Name-based location carrying this route's params, query, hash and state.
    pub fn to_named_location(&self) -> NamedLocation {
        NamedLocation {
            name: self.name.clone(),
            params: self.params.clone(),
            query: self.query.clone(),
            hash: self.hash.clone(),
            state: self.state.clone(),
        }
    }

    /// Insert a meta entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shared_meta_reflects_updates() {
        let meta = MetaValue::shared(json!({"fr": {"slug": "a"}}));
        if let MetaValue::Shared(cell) = &meta {
            *cell.write() = json!({"fr": {"slug": "b"}});
        }
        assert_eq!(meta.get(), json!({"fr": {"slug": "b"}}));
    }

    #[test]
    fn test_link_path_prefers_redirect_source() {
        let mut route = ResolvedRoute::new(Some("home".to_string()), "/home");
        assert_eq!(route.link_path(), "/home");

        route.redirected_from = Some("/".to_string());
        assert_eq!(route.link_path(), "/");
    }

    #[test]
    fn test_is_named() {
        assert!(ResolvedRoute::new(Some("a".to_string()), "/a").is_named());
        assert!(!ResolvedRoute::new(Some(String::new()), "/a").is_named());
        assert!(!ResolvedRoute::new(None, "/a").is_named());
    }
}
