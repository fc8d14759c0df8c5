//! Season history: end-of-season ranks scraped from a third-party profile page.

pub mod parse;
pub mod scrape;

pub use parse::{is_excluded_season, parse_season_history};
pub use scrape::{ScrapeOutcome, SeasonHistoryScraper};
