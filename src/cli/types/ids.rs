//! Identity types for player lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::region::Region;

/// Canonical cache key for one player on one platform.
///
/// Built as `lowercase(gameName)#lowercase(tagLine)#region`, so lookups are
/// case-insensitive on the Riot ID while the same Riot ID on two different
/// platforms stays two different players.
///
/// # Examples
///
/// ```rust
/// use lol_rank::{PlayerKey, Region};
///
/// let region = Region::new("euw1");
/// let key = PlayerKey::new("Faker", "KR1", &region);
/// assert_eq!(key.as_str(), "faker#kr1#euw1");
/// assert_eq!(key, PlayerKey::new("FAKER", "kr1", &region));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey(String);

impl PlayerKey {
    pub fn new(game_name: &str, tag_line: &str, region: &Region) -> Self {
        // `region` is already trimmed and lowercased by `Region::new`, so
        // `EUW1` and `euw1` share one key.
        Self(format!(
            "{}#{}#{}",
            game_name.to_lowercase(),
            tag_line.to_lowercase(),
            region
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable player identifier issued by the account endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puuid(pub String);

impl Puuid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Puuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
