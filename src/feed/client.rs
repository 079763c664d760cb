// client.rs
use crate::feed::FetchError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("renting_catalog/", env!("CARGO_PKG_VERSION"));

/// Fetches feed documents over HTTP, optionally through a pass-through relay.
///
/// One request per call; a failure is reported, never retried.
pub struct FeedClient {
    client: Client,
    relay: Option<Url>,
}

impl FeedClient {
    pub fn new(timeout: Duration, relay: Option<Url>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/xml,text/xml;q=0.9,*/*;q=0.5"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, relay })
    }

    /// The URL actually requested for `target`.
    ///
    /// With a relay, the target's path and query are appended to the relay base,
    /// so `https://api.example.com/feed.xml?k=1` through `http://relay/api/feed`
    /// becomes `http://relay/api/feed/feed.xml?k=1`.
    pub fn request_url(&self, target: &Url) -> Url {
        match &self.relay {
            Some(relay) => {
                let mut url = relay.clone();
                let path = format!("{}{}", relay.path().trim_end_matches('/'), target.path());
                url.set_path(&path);
                url.set_query(target.query());
                url
            }
            None => target.clone(),
        }
    }

    pub fn fetch(&self, target: &Url) -> Result<String, FetchError> {
        let url = self.request_url(target);
        let start = std::time::Instant::now();

        let resp = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| {
                warn!("⚠️ Feed request to {url} failed: {e}");
                FetchError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("⚠️ Feed request to {url} returned {status}");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        info!(
            "✅ Fetched feed from {url} ({} bytes in {:?})",
            text.len(),
            start.elapsed()
        );
        Ok(text)
    }
}

/// Parses a configured feed URL.
pub fn parse_feed_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))
}
