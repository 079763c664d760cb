pub mod catalog;
pub mod home;

pub use catalog::{catalog_page, CatalogVm};
pub use home::home_page;
