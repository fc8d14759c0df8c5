//! Platform regions and the continental routing buckets behind them.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Platform region a player lives on (e.g. `eun1`, `na1`, `kr`).
///
/// Stored lowercased. Unknown platforms are accepted as-is: they route to the
/// asia bucket and map to the default scrape slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(region: &str) -> Self {
        Self(region.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Continental bucket used for account and match endpoints.
    pub fn routing(&self) -> Routing {
        match self.0.as_str() {
            "eun1" | "euw1" | "tr1" | "ru" => Routing::Europe,
            "na1" | "br1" | "la1" | "la2" => Routing::Americas,
            _ => Routing::Asia,
        }
    }

    /// Region slug used by the season history site.
    pub fn history_slug(&self) -> &'static str {
        match self.0.as_str() {
            "eun1" => "eune",
            "euw1" => "euw",
            "na1" => "na",
            "kr" => "kr",
            "br1" => "br",
            "tr1" => "tr",
            "ru" => "ru",
            "la1" => "lan",
            "la2" => "las",
            _ => "eune",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self("eun1".to_string())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Continental routing bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Routing {
    Europe,
    Americas,
    Asia,
}

impl Routing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Routing::Europe => "europe",
            Routing::Americas => "americas",
            Routing::Asia => "asia",
        }
    }
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
