use crate::domain::{FileInfo, FilterConfig};
use crate::feed::ListingRecord;
use crate::templates::components::{filter_bar, vehicle_grid, FilterBarVm};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CatalogVm<'a> {
    pub info: &'a FileInfo,
    pub brands: &'a [String],
    pub config: &'a FilterConfig,
    pub listings: &'a [&'a ListingRecord],
    pub total: usize,
    pub error: Option<&'a str>,
    pub image_proxy: Option<&'a str>,
}

pub fn catalog_page(vm: &CatalogVm) -> Markup {
    let bar = FilterBarVm {
        brands: vm.brands,
        config: vm.config,
        shown: vm.listings.len(),
        total: vm.total,
    };

    desktop_layout(
        "Catálogo de Vehículos",
        Some(vm.info),
        html! {
            (filter_bar(&bar))

            @if let Some(message) = vm.error {
                div class="alert container" role="alert" { p { (message) } }
            }

            main class="container" {
                (vehicle_grid(vm.listings, vm.image_proxy))
            }
        },
    )
}
