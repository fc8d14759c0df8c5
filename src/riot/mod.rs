//! Riot API access and the analytics derived from it.

pub mod champions;
pub mod compute;
pub mod fetcher;
pub mod http;
pub mod types;

pub use champions::{CatalogStatus, ChampionCatalog, ChampionInfo};
pub use fetcher::RankedStatsFetcher;
pub use http::RiotClient;
