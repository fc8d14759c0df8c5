//! SQLite persistence for player snapshots and scraped season history.
//!
//! - `models`: row wrappers
//! - `schema`: connection and table management
//! - `queries`: cache reads and writes

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::PlayerDatabase;
