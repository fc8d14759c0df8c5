//! Command implementations for the lol-rank CLI

pub mod cache;
pub mod champions;
pub mod common;
pub mod lookup;

pub use lookup::LookupService;
