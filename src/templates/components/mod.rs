pub mod error;
pub mod filter_bar;
pub mod provider_selector;
pub mod uploader;
pub mod vehicle_card;
pub mod vehicle_grid;

pub use error::error_page;
pub use filter_bar::{filter_bar, FilterBarVm};
pub use provider_selector::provider_selector;
pub use uploader::uploader;
pub use vehicle_card::vehicle_card;
pub use vehicle_grid::vehicle_grid;
