//! Core utilities shared across the lookup pipeline
//!
//! - `http`: header maps, client construction and URL building
//! - `clock`: Unix timestamps for cache rows

pub mod clock;
pub mod http;

pub use clock::unix_now;
pub use http::{browser_header_map, build_client, build_url, riot_header_map};
