//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// A cached value and the unix time it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cached<T> {
    pub value: T,
    pub updated_at: u64,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheCounts {
    pub players: u64,
    pub season_histories: u64,
}
