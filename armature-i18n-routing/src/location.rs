//! Route Locations
//!
//! The two shapes a route reference takes once normalized: a path-based
//! location (`/about?x=1#top`) or a name-based location (`about` plus params).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A route param or query value: a single string or a repeated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    /// The value if it holds exactly one string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s),
            ParamValue::List(_) => None,
        }
    }

    /// All contained values in order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(s) => vec![s.as_str()],
            ParamValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Render as a path segment; lists are joined with `/`.
    pub fn to_segment(&self) -> String {
        self.values().join("/")
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(first) => {
                *self = ParamValue::List(vec![std::mem::take(first), value]);
            }
            ParamValue::List(items) => items.push(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Single(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Single(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

/// Route params keyed by param name.
pub type Params = BTreeMap<String, ParamValue>;

/// Decoded query string keyed by parameter name.
pub type Query = BTreeMap<String, ParamValue>;

/// A location identified by its path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLocation {
    pub path: String,
    #[serde(default)]
    pub query: Query,
    /// Fragment including the leading `#`, or empty
    #[serde(default)]
    pub hash: String,
}

impl PathLocation {
    /// Create a path location without query or hash.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the fragment.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }
}

/// A location identified by its route name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    /// Route name; `None` means "the current route"
    pub name: Option<String>,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub query: Query,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

impl NamedLocation {
    /// Create a location for a named route.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A location that names no route at all.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Add a route param.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the fragment.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Attach history state.
    pub fn with_state(mut self, state: serde_json::Value) -> Self {
        self.state = Some(state);
        self
    }
}

/// A normalized route descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteLocation {
    Path(PathLocation),
    Named(NamedLocation),
}

impl RouteLocation {
    /// Short description used in errors and logs.
    pub fn describe(&self) -> String {
        match self {
            RouteLocation::Path(loc) => loc.path.clone(),
            RouteLocation::Named(loc) => match &loc.name {
                Some(name) => format!("name={}", name),
                None => "<unnamed>".to_string(),
            },
        }
    }
}

impl From<PathLocation> for RouteLocation {
    fn from(loc: PathLocation) -> Self {
        RouteLocation::Path(loc)
    }
}

impl From<NamedLocation> for RouteLocation {
    fn from(loc: NamedLocation) -> Self {
        RouteLocation::Named(loc)
    }
}

/// Any route reference callers may hand to the localizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteRef {
    /// A path (starts with `/`) or a route name
    Str(String),
    /// An already structured location
    Location(RouteLocation),
}

impl RouteRef {
    /// Convert the reference into a route descriptor.
    ///
    /// Strings starting with `/` are parsed as paths, any other string is a
    /// route name, and structured locations pass through unchanged.
    pub fn normalize(&self) -> RouteLocation {
        match self {
            RouteRef::Str(s) if s.starts_with('/') => RouteLocation::Path(parse_path(s)),
            RouteRef::Str(s) => RouteLocation::Named(NamedLocation::new(s.as_str())),
            RouteRef::Location(loc) => loc.clone(),
        }
    }
}

impl From<&str> for RouteRef {
    fn from(s: &str) -> Self {
        RouteRef::Str(s.to_string())
    }
}

impl From<String> for RouteRef {
    fn from(s: String) -> Self {
        RouteRef::Str(s)
    }
}

impl From<&String> for RouteRef {
    fn from(s: &String) -> Self {
        RouteRef::Str(s.clone())
    }
}

impl From<RouteLocation> for RouteRef {
    fn from(loc: RouteLocation) -> Self {
        RouteRef::Location(loc)
    }
}

impl From<PathLocation> for RouteRef {
    fn from(loc: PathLocation) -> Self {
        RouteRef::Location(RouteLocation::Path(loc))
    }
}

impl From<NamedLocation> for RouteRef {
    fn from(loc: NamedLocation) -> Self {
        RouteRef::Location(RouteLocation::Named(loc))
    }
}

/// Split `path?query#hash` into a path location.
pub fn parse_path(input: &str) -> PathLocation {
    let (rest, hash) = match input.find('#') {
        Some(idx) => (&input[..idx], input[idx..].to_string()),
        None => (input, String::new()),
    };

    let (path, query) = rest
        .split_once('?')
        .map(|(p, q)| (p, parse_query(q)))
        .unwrap_or((rest, Query::new()));

    PathLocation {
        path: path.to_string(),
        query,
        hash,
    }
}

/// Decode a query string; repeated keys collect into a list.
///
/// Malformed input degrades to whatever pairs could be decoded.
pub fn parse_query(query: &str) -> Query {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

    let mut out = Query::new();
    for (key, value) in pairs {
        match out.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                out.insert(key, ParamValue::Single(value));
            }
        }
    }
    out
}

/// Encode a query map back into a query string (without `?`).
pub fn stringify_query(query: &Query) -> String {
    let pairs: Vec<(&str, &str)> = query
        .iter()
        .flat_map(|(key, value)| {
            value
                .values()
                .into_iter()
                .map(move |v| (key.as_str(), v))
        })
        .collect();

    serde_urlencoded::to_string(pairs).unwrap_or_default()
}
