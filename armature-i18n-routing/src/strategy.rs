//! Routing strategies

use crate::RoutingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How locales are encoded into route names and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every locale is prefixed
    Prefix,
    /// Every locale is prefixed, the default locale is also served unprefixed
    PrefixAndDefault,
    /// Every locale except the default one is prefixed
    #[default]
    PrefixExceptDefault,
    /// No locale prefixes and no locale route names
    NoPrefix,
}

impl Strategy {
    /// Get strategy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Prefix => "prefix",
            Strategy::PrefixAndDefault => "prefix_and_default",
            Strategy::PrefixExceptDefault => "prefix_except_default",
            Strategy::NoPrefix => "no_prefix",
        }
    }

    /// All strategies.
    pub fn all() -> [Strategy; 4] {
        [
            Strategy::Prefix,
            Strategy::PrefixAndDefault,
            Strategy::PrefixExceptDefault,
            Strategy::NoPrefix,
        ]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "prefix" => Ok(Strategy::Prefix),
            "prefix_and_default" => Ok(Strategy::PrefixAndDefault),
            "prefix_except_default" => Ok(Strategy::PrefixExceptDefault),
            "no_prefix" => Ok(Strategy::NoPrefix),
            other => Err(RoutingError::Config(format!("unknown strategy: {}", other))),
        }
    }
}
