// src/domain/catalog.rs

use crate::feed::{FeedError, FeedNormalizer, ListingRecord, NormalizedFeed};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// Where the loaded listings came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub vehicle_count: usize,
    pub brand_count: usize,
    pub loaded_at: DateTime<Local>,
}

/// One successful parse. Never mutated, only replaced.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub records: Arc<[ListingRecord]>,
    pub brands: Arc<[String]>,
    pub info: FileInfo,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub loaded: Option<LoadedCatalog>,
    /// Message of the last failed load, cleared by the next success.
    pub error: Option<String>,
}

impl CatalogSnapshot {
    pub fn records(&self) -> &[ListingRecord] {
        self.loaded.as_ref().map(|c| &c.records[..]).unwrap_or(&[])
    }

    pub fn brands(&self) -> &[String] {
        self.loaded.as_ref().map(|c| &c.brands[..]).unwrap_or(&[])
    }

    pub fn has_listings(&self) -> bool {
        !self.records().is_empty()
    }
}

/// Source of truth for the listings being browsed.
///
/// Shared by every request worker. A successful load swaps the whole dataset;
/// a failed one only sets the error message.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    state: Arc<RwLock<CatalogSnapshot>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        // state is only ever swapped whole, so a poisoned value is still consistent
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Normalizes `text` and, on success, replaces the current dataset.
    pub fn ingest(
        &self,
        normalizer: &FeedNormalizer,
        source_name: &str,
        text: &str,
    ) -> Result<FileInfo, FeedError> {
        match normalizer.normalize(text) {
            Ok(feed) => Ok(self.replace(source_name, feed)),
            Err(e) => {
                self.record_failure(e.to_string());
                Err(e)
            }
        }
    }

    pub fn replace(&self, source_name: &str, feed: NormalizedFeed) -> FileInfo {
        let info = FileInfo {
            name: source_name.to_string(),
            vehicle_count: feed.records.len(),
            brand_count: feed.brands.len(),
            loaded_at: Local::now(),
        };

        let loaded = LoadedCatalog {
            records: feed.records.into(),
            brands: feed.brands.into(),
            info: info.clone(),
        };

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = CatalogSnapshot {
            loaded: Some(loaded),
            error: None,
        };

        info!(
            "📦 Loaded {} vehicles / {} brands from {}",
            info.vehicle_count, info.brand_count, info.name
        );
        info
    }

    /// Keeps the current dataset and remembers why the last load failed.
    pub fn record_failure(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("⚠️ Catalog load failed: {message}");

        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .error = Some(message);
    }

    pub fn clear(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = CatalogSnapshot::default();
        info!("🧹 Catalog cleared");
    }
}
