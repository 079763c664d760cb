// templates/pages/home.rs

use crate::domain::ProviderSelection;
use crate::templates::components::{provider_selector, uploader};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(error: Option<&str>, providers: &ProviderSelection, can_fetch: bool) -> Markup {
    desktop_layout(
        "Catálogo de Vehículos",
        None,
        html! {
            main class="container" {
                (provider_selector(providers))
                (uploader(error, can_fetch && !providers.is_empty()))
            }
        },
    )
}
