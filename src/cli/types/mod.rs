//! Type-safe wrappers for Riot identities and regions.

pub mod ids;
pub mod region;

pub use ids::{PlayerKey, Puuid};
pub use region::{Region, Routing};
