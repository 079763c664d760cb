use crate::domain::format::{
    emissions_badge, format_price, image_url, price_terms, transmission_label,
};
use crate::feed::ListingRecord;
use maud::{html, Markup};

pub fn vehicle_card(listing: &ListingRecord, image_proxy: Option<&str>) -> Markup {
    let emissions = emissions_badge(listing.emissions_badge.as_deref());
    let image = image_url(listing.main_image(), image_proxy, &listing.brand);

    html! {
        article class="vehicle-card" id=(listing.id) {
            @if listing.on_promotion {
                div class="promo" { "PROMOCIÓN ESPECIAL" }
            }

            div class="photo" {
                img src=(image) alt=(listing.title()) loading="lazy";

                div class="badges" {
                    @if let Some(estado) = &listing.estado {
                        span class="badge badge-status" { (estado) }
                    }
                    @if let Some(badge) = emissions {
                        span class={ "badge " (badge.class) } { (badge.label) }
                    }
                }

                @if listing.images.len() > 1 {
                    span class="image-count" { "📷 " (listing.images.len()) }
                }
            }

            div class="body" {
                h3 { (listing.brand) " " (listing.model.as_deref().unwrap_or("")) }
                @if let Some(version) = &listing.version {
                    p class="version" title=(version) { (version) }
                }

                div class="price" {
                    span class="amount" { (format_price(listing.price)) }
                    span class="per" { "/mes" }
                }
                p class="terms" { (price_terms(&listing.price_details)) }

                ul class="specs" {
                    @if let Some(fuel) = &listing.fuel { li { "⛽ " (fuel) } }
                    @if listing.transmission.is_some() {
                        li { "⚙ " (transmission_label(listing.transmission.as_deref())) }
                    }
                    @if let Some(seats) = &listing.seats { li { (seats) " plazas" } }
                    @if let Some(power) = &listing.power { li { (power) " CV" } }
                }

                div class="pills" {
                    @if let Some(color) = &listing.color { span class="pill" { (color) } }
                    @if let Some(consumption) = &listing.fuel_consumption_combined {
                        span class="pill" { (consumption) " L/100km" }
                    }
                    @if let Some(doors) = &listing.doors { span class="pill" { (doors) " puertas" } }
                }

                details {
                    summary class="primary" { "Ver detalles" }
                    div class="details" {
                        p { "Kilometraje: " (listing.kilometers.as_deref().unwrap_or("N/A")) " km" }
                        @if let Some(dealer) = &listing.dealer_id {
                            p { "Dealer ID: " (dealer) }
                        }
                        @if let Some(body_type) = &listing.body_type {
                            p { "Carrocería: " (body_type) }
                        }
                    }
                }

                @match listing.all_offers.len() {
                    0 => {}
                    1 => { p class="offers" { "1 opción de renting" } }
                    n => { p class="offers" { (n) " opciones de renting" } }
                }
            }
        }
    }
}
