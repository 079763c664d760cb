pub mod client;
pub mod feed_error;
pub mod fields;
pub mod models;
pub mod normalizer;

pub use client::FeedClient;
pub use feed_error::{FeedError, FetchError};
pub use models::{ListingRecord, NormalizedFeed, PriceDetails};
pub use normalizer::{FeedNormalizer, FeedSchema};
