use crate::config::AppConfig;
use crate::domain::{Catalog, ProviderStore};
use crate::feed::{FeedClient, FeedNormalizer, FeedSchema, FetchError};
use std::sync::Arc;
use url::Url;

/// Everything a request handler needs. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub providers: ProviderStore,
    pub normalizer: Arc<FeedNormalizer>,
    pub remote: Option<Arc<RemoteFeed>>,
    pub image_proxy: Option<String>,
}

/// The configured online feed and the client used to fetch it.
pub struct RemoteFeed {
    pub url: Url,
    pub client: FeedClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let normalizer = FeedNormalizer::new(FeedSchema {
            entry_tag: config.feed_entry_tag.clone(),
            ..FeedSchema::default()
        });

        let remote = match &config.feed_url {
            Some(url) => Some(Arc::new(RemoteFeed {
                url: url.clone(),
                client: FeedClient::new(config.fetch_timeout, config.feed_relay_url.clone())?,
            })),
            None => None,
        };

        Ok(Self {
            catalog: Catalog::new(),
            providers: ProviderStore::default(),
            normalizer: Arc::new(normalizer),
            remote,
            image_proxy: config.image_proxy_url.clone(),
        })
    }
}
