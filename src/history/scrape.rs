//! Profile page fetch for season history.
//!
//! The scraper never fails the caller. Transport errors, non-2xx responses
//! and pages without any rank sentence all come back as a typed
//! [`ScrapeOutcome`] so the cache policy can tell "nothing found" apart from
//! "could not look".

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::cli::types::Region;
use crate::config::Endpoints;
use crate::core::{browser_header_map, build_client, build_url};
use crate::history::parse::parse_season_history;
use crate::models::SeasonHistory;
use crate::Result;


#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    Found(SeasonHistory),
    /// The page loaded but held no recognizable season ranks.
    Empty,
    Failed(String),
}

impl ScrapeOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ScrapeOutcome::Found(_))
    }

    /// The scraped history, empty unless something was found.
    pub fn into_history(self) -> SeasonHistory {
        match self {
            ScrapeOutcome::Found(history) => history,
            ScrapeOutcome::Empty | ScrapeOutcome::Failed(_) => SeasonHistory::new(),
        }
    }
}

pub struct SeasonHistoryScraper {
    client: Client,
    base: String,
}

impl SeasonHistoryScraper {
    pub fn new(endpoints: &Endpoints, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(browser_header_map(), timeout)?,
            base: endpoints.history_base.clone(),
        })
    }

    /// `{base}/summoner/{slug}/{gameName}-{tagLine}`
    pub fn profile_url(&self, game_name: &str, tag_line: &str, region: &Region) -> Result<Url> {
        let profile = format!("{game_name}-{tag_line}");
        build_url(&self.base, &["summoner", region.history_slug(), &profile])
    }

    pub async fn scrape(&self, game_name: &str, tag_line: &str, region: &Region) -> ScrapeOutcome {
        match self.fetch_page(game_name, tag_line, region).await {
            Ok(page) => {
                let history = parse_season_history(&page);
                debug!(seasons = history.len(), "season history parsed");
                if history.is_empty() {
                    ScrapeOutcome::Empty
                } else {
                    ScrapeOutcome::Found(history)
                }
            }
            Err(e) => {
                warn!(game_name, tag_line, region = %region, error = %e, "season history scrape failed");
                ScrapeOutcome::Failed(e.to_string())
            }
        }
    }

    async fn fetch_page(&self, game_name: &str, tag_line: &str, region: &Region) -> Result<String> {
        let url = self.profile_url(game_name, tag_line, region)?;
        debug!(url = %url, "GET season history page");
        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}
