use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use crate::feed::client::parse_feed_url;
use crate::feed::normalizer::DEFAULT_ENTRY_TAG;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub feed_url: Option<Url>,
    pub feed_relay_url: Option<Url>,
    pub feed_entry_tag: String,
    pub fetch_timeout: Duration,
    pub image_proxy_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            feed_url: None,
            feed_relay_url: None,
            feed_entry_tag: DEFAULT_ENTRY_TAG.to_string(),
            fetch_timeout: Duration::from_secs(30),
            image_proxy_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = AppConfig::default();

        Ok(Self {
            bind_addr: match env::var("BIND_ADDR") {
                Ok(addr) => addr.parse().context("BIND_ADDR must be host:port")?,
                Err(_) => defaults.bind_addr,
            },
            max_workers: match env::var("MAX_WORKERS") {
                Ok(n) => n.parse().context("MAX_WORKERS must be a valid number")?,
                Err(_) => defaults.max_workers,
            },
            feed_url: optional_url("FEED_URL")?,
            feed_relay_url: optional_url("FEED_RELAY_URL")?,
            feed_entry_tag: env::var("FEED_ENTRY_TAG")
                .ok()
                .filter(|tag| !tag.trim().is_empty())
                .unwrap_or(defaults.feed_entry_tag),
            fetch_timeout: match env::var("FETCH_TIMEOUT_SECS") {
                Ok(secs) => Duration::from_secs(
                    secs.parse()
                        .context("FETCH_TIMEOUT_SECS must be a valid number")?,
                ),
                Err(_) => defaults.fetch_timeout,
            },
            image_proxy_url: env::var("IMAGE_PROXY_URL")
                .ok()
                .filter(|u| !u.is_empty()),
        })
    }
}

fn optional_url(key: &str) -> Result<Option<Url>> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            let url = parse_feed_url(raw.trim()).with_context(|| format!("{key} must be a valid URL"))?;
            Ok(Some(url))
        }
        _ => Ok(None),
    }
}
