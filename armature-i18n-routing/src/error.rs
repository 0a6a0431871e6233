//! Error types for localized routing

use thiserror::Error;

/// Numeric tag a router attaches to "no route matched" failures.
pub const NO_MATCH_CODE: u8 = 1;

/// Errors that can occur while resolving localized routes.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The router found no route for the location
    #[error("No route matches location: {location}")]
    NoMatch { location: String, code: u8 },

    /// Any other router failure (missing params, broken records, ...)
    #[error("Router error: {0}")]
    Router(String),

    /// Invalid routing configuration
    #[error("Invalid routing configuration: {0}")]
    Config(String),

    /// IO error while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RoutingError {
    /// Build a no-match error for a location description.
    pub fn no_match(location: impl Into<String>) -> Self {
        Self::NoMatch {
            location: location.into(),
            code: NO_MATCH_CODE,
        }
    }

    /// Whether this is the router's "no match" failure.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { code, .. } if *code == NO_MATCH_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_classified() {
        let err = RoutingError::no_match("about___fr");
        assert!(err.is_no_match());
        assert!(err.to_string().contains("about___fr"));
    }

    #[test]
    fn test_other_errors_are_not_no_match() {
        assert!(!RoutingError::Router("missing param".to_string()).is_no_match());
        assert!(!RoutingError::Config("bad".to_string()).is_no_match());

        let foreign_tag = RoutingError::NoMatch {
            location: "/x".to_string(),
            code: 4,
        };
        assert!(!foreign_tag.is_no_match());
    }
}
