use crate::feed::ListingRecord;
use crate::templates::components::vehicle_card;
use maud::{html, Markup};

pub fn vehicle_grid(listings: &[&ListingRecord], image_proxy: Option<&str>) -> Markup {
    html! {
        @if listings.is_empty() {
            div class="empty" {
                p { "No se encontraron vehículos con los filtros aplicados." }
            }
        } @else {
            div class="grid" {
                @for listing in listings {
                    (vehicle_card(listing, image_proxy))
                }
            }
        }
    }
}
