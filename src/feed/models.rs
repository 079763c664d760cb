use serde::Serialize;

// anuncio
//  ├── motorflashID, dealerID
//  ├── marca, modelo, version
//  ├── renting
//  │    └── ofertaRenting*
//  │         ├── cuota
//  │         ├── meses
//  │         └── km
//  ├── fotos
//  │    └── foto*
//  ├── consumo
//  │    └── mixto
//  └── combustible, cambio, plazas, puertas, color, potencia, kilometros,
//      estado, disponible, emisiones, distintivo, carroceria,
//      vehiculo_en_promocion

pub const DEFAULT_MONTHS: &str = "36";
pub const DEFAULT_KM: &str = "10000";

/// One financing option as it appears in the feed.
///
/// `months` and `km` stay as raw strings; only the price is numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub price: f64,
    pub months: Option<String>,
    pub km: Option<String>,
}

/// Terms of the offer that set the listing's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDetails {
    pub months: Option<String>,
    pub km: Option<String>,
}

impl Default for PriceDetails {
    fn default() -> Self {
        Self {
            months: Some(DEFAULT_MONTHS.to_string()),
            km: Some(DEFAULT_KM.to_string()),
        }
    }
}

/// A vehicle listing normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub dealer_id: Option<String>,
    pub brand: String,
    pub model: Option<String>,
    pub version: Option<String>,

    // Cheapest monthly fee and the terms it came with
    pub price: Option<f64>,
    pub price_details: PriceDetails,
    pub all_offers: Vec<Offer>,

    pub images: Vec<String>,

    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub seats: Option<String>,
    pub doors: Option<String>,
    pub color: Option<String>,
    pub power: Option<String>,
    pub kilometers: Option<String>,
    pub estado: Option<String>,
    pub disponible: Option<String>,
    pub emissions: Option<String>,
    pub emissions_badge: Option<String>,
    pub fuel_consumption_combined: Option<String>,
    pub body_type: Option<String>,
    pub on_promotion: bool,
}

impl ListingRecord {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price used by filters and sorts: a missing price counts as zero.
    pub fn effective_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn title(&self) -> String {
        match self.model.as_deref() {
            Some(model) => format!("{} {}", self.brand, model),
            None => self.brand.clone(),
        }
    }
}

/// Output of one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedFeed {
    pub records: Vec<ListingRecord>,
    pub brands: Vec<String>,
}
