//! HTTP utilities for upstream communication

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Url};

use crate::Result;

const RIOT_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-riot-token");

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Headers for every Riot API call: the API token plus a JSON accept.
pub fn riot_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut token = HeaderValue::from_str(api_key)?;
    token.set_sensitive(true);
    h.insert(RIOT_TOKEN_HEADER, token);
    Ok(h)
}

/// Browser-like headers; the history site rejects non-browser clients.
pub fn browser_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    h
}

/// Client with default headers and a per-request timeout.
pub fn build_client(headers: HeaderMap, timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()?)
}

/// Append percent-encoded path segments to `base`.
///
/// Riot IDs can contain spaces and non-ASCII characters, so segments are never
/// spliced into the URL string by hand.
pub fn build_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
