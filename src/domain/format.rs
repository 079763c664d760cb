// src/domain/format.rs

use crate::feed::PriceDetails;
use num_format::{Locale, ToFormattedString};
use std::iter;
use url::form_urlencoded::byte_serialize;

pub const PRICE_ON_REQUEST: &str = "Consultar";
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300/ef4444/ffffff?text=";

/// Spanish euro formatting with up to two decimals; no price (or zero) reads "Consultar".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(amount) if amount != 0.0 && amount.is_finite() => format_euros(amount),
        _ => PRICE_ON_REQUEST.to_string(),
    }
}

fn format_euros(amount: f64) -> String {
    let (units, cents) = round_cents(amount.abs());

    let mut out = String::new();
    if amount < 0.0 {
        out.push('-');
    }
    out.push_str(&group_es(units));
    match cents {
        0 => {}
        c if c % 10 == 0 => out.push_str(&format!(",{}", c / 10)),
        c => out.push_str(&format!(",{c:02}")),
    }
    out.push_str("\u{a0}€");
    out
}

/// Half-up rounding to cents of the shortest decimal form, so 1.005 is 1.01.
fn round_cents(amount: f64) -> (u64, u32) {
    let shortest = amount.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut units: u64 = int_part.parse().unwrap_or(u64::MAX);
    let digits: Vec<u32> = frac_part
        .chars()
        .filter_map(|c| c.to_digit(10))
        .chain(iter::repeat(0))
        .take(3)
        .collect();

    let mut cents = digits[0] * 10 + digits[1];
    if digits[2] >= 5 {
        cents += 1;
        if cents == 100 {
            cents = 0;
            units = units.saturating_add(1);
        }
    }
    (units, cents)
}

/// Spanish grouping; four-digit numbers stay ungrouped.
pub fn group_es(n: u64) -> String {
    if n < 10_000 {
        n.to_string()
    } else {
        n.to_formatted_string(&Locale::es)
    }
}

/// Leading integer of a raw feed value, e.g. `"10000 km"` is 10000.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

pub fn format_km(raw: Option<&str>) -> Option<String> {
    let km = parse_int_prefix(raw?)?;
    let grouped = group_es(km.unsigned_abs());
    Some(if km < 0 { format!("-{grouped}") } else { grouped })
}

/// "36 meses • 10.000 km/año"
pub fn price_terms(details: &PriceDetails) -> String {
    let months = details.months.as_deref().unwrap_or("-");
    let km = format_km(details.km.as_deref()).unwrap_or_else(|| "-".to_string());
    format!("{months} meses • {km} km/año")
}

pub fn transmission_label(transmission: Option<&str>) -> String {
    let Some(transmission) = transmission else {
        return "N/A".to_string();
    };
    let lower = transmission.to_lowercase();
    if lower.contains("manual") {
        "Manual".to_string()
    } else if lower.contains("automático") || lower.contains("automatico") {
        "Automático".to_string()
    } else {
        transmission.to_string()
    }
}

/// Badge for the environmental sticker (distintivo ambiental).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionsBadge {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn emissions_badge(badge: Option<&str>) -> Option<EmissionsBadge> {
    let (label, class) = match badge? {
        "C" => ("C", "badge-green"),
        "B" => ("B", "badge-blue"),
        "ECO" => ("ECO", "badge-teal"),
        "CERO" => ("0", "badge-purple"),
        _ => return None,
    };
    Some(EmissionsBadge { label, class })
}

/// URL to put in an `img` tag: remote images go through `proxy` when one is set,
/// missing images get a placeholder with the brand name.
pub fn image_url(src: Option<&str>, proxy: Option<&str>, brand: &str) -> String {
    match (src, proxy) {
        (None, _) => {
            let text = if brand.is_empty() { "Vehicle" } else { brand };
            format!("{PLACEHOLDER_IMAGE}{}", encode(text))
        }
        (Some(src), Some(proxy)) if src.starts_with("http") => format!("{proxy}{}", encode(src)),
        (Some(src), _) => src.to_string(),
    }
}

fn encode(text: &str) -> String {
    byte_serialize(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_spanish_formatting() {
        assert_eq!(format_price(Some(299.0)), "299\u{a0}€");
        assert_eq!(format_price(Some(349.5)), "349,5\u{a0}€");
        assert_eq!(format_price(Some(1234.567)), "1234,57\u{a0}€");
        assert_eq!(format_price(Some(12345.0)), "12.345\u{a0}€");
    }

    #[test]
    fn missing_or_zero_price_is_on_request() {
        assert_eq!(format_price(None), "Consultar");
        assert_eq!(format_price(Some(0.0)), "Consultar");
        assert_eq!(format_price(Some(f64::NAN)), "Consultar");
    }

    #[test]
    fn rounds_the_decimal_that_is_shown() {
        assert_eq!(format_price(Some(1.005)), "1,01\u{a0}€");
        assert_eq!(format_price(Some(12.345)), "12,35\u{a0}€");
        assert_eq!(format_price(Some(99.999)), "100\u{a0}€");
        assert_eq!(format_price(Some(-20.5)), "-20,5\u{a0}€");
    }

    #[test]
    fn groups_from_five_digits() {
        assert_eq!(group_es(5000), "5000");
        assert_eq!(group_es(10000), "10.000");
        assert_eq!(group_es(1234567), "1.234.567");
        assert_eq!(format_price(Some(12345.0)), "12.345\u{a0}€");
    }

    #[test]
    fn terms_show_months_and_yearly_km() {
        assert_eq!(
            price_terms(&PriceDetails::default()),
            "36 meses • 10.000 km/año"
        );
        let details = PriceDetails {
            months: Some("48".into()),
            km: Some("15000 km".into()),
        };
        assert_eq!(price_terms(&details), "48 meses • 15.000 km/año");
    }

    #[test]
    fn km_without_digits_is_none() {
        assert_eq!(format_km(Some("n/d")), None);
        assert_eq!(format_km(None), None);
        assert_eq!(parse_int_prefix("  -42abc"), Some(-42));
    }

    #[test]
    fn transmission_labels() {
        assert_eq!(transmission_label(Some("Cambio MANUAL 6v")), "Manual");
        assert_eq!(transmission_label(Some("Automático")), "Automático");
        assert_eq!(transmission_label(Some("automatico")), "Automático");
        assert_eq!(transmission_label(Some("CVT")), "CVT");
        assert_eq!(transmission_label(None), "N/A");
    }

    #[test]
    fn known_emission_stickers_only() {
        assert_eq!(emissions_badge(Some("CERO")).unwrap().label, "0");
        assert_eq!(emissions_badge(Some("ECO")).unwrap().label, "ECO");
        assert!(emissions_badge(Some("A")).is_none());
        assert!(emissions_badge(None).is_none());
    }

    #[test]
    fn image_urls() {
        assert_eq!(
            image_url(Some("https://cdn/x.jpg"), Some("https://proxy/?url="), "Ford"),
            "https://proxy/?url=https%3A%2F%2Fcdn%2Fx.jpg"
        );
        assert_eq!(image_url(Some("https://cdn/x.jpg"), None, "Ford"), "https://cdn/x.jpg");
        assert_eq!(image_url(Some("/local.jpg"), Some("https://proxy/?url="), "Ford"), "/local.jpg");
        assert!(image_url(None, None, "Land Rover").ends_with("text=Land+Rover"));
        assert!(image_url(None, None, "").ends_with("text=Vehicle"));
    }
}
