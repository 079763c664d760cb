pub mod catalog;
pub mod collation;
pub mod filters;
pub mod format;
pub mod providers;

pub use catalog::{Catalog, FileInfo};
pub use filters::{derive, BrandFilter, FilterConfig, SortKey};
pub use providers::{ProviderSelection, ProviderStore, PROVIDERS};
