// src/domain/filters.rs

use crate::domain::collation::LocaleCollator;
use crate::feed::ListingRecord;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use url::form_urlencoded;

pub const ALL_BRANDS: &str = "all";
pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 9999.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    #[default]
    All,
    Only(String),
}

impl BrandFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_BRANDS {
            BrandFilter::All
        } else {
            BrandFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BrandFilter::All => ALL_BRANDS,
            BrandFilter::Only(brand) => brand,
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches(&self, brand: &str) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Only(wanted) => wanted == brand,
        }
    }
}

impl Serialize for BrandFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    BrandAsc,
    BrandDesc,
    /// Keeps document order.
    Unsorted,
}

impl SortKey {
    /// The choices offered in the sort dropdown, with their labels.
    pub const CHOICES: [(SortKey, &'static str); 4] = [
        (SortKey::PriceAsc, "Precio: Menor a Mayor"),
        (SortKey::PriceDesc, "Precio: Mayor a Menor"),
        (SortKey::BrandAsc, "Marca: A-Z"),
        (SortKey::BrandDesc, "Marca: Z-A"),
    ];

    /// Unknown keys fall back to document order.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "brand-asc" => SortKey::BrandAsc,
            "brand-desc" => SortKey::BrandDesc,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::BrandAsc => "brand-asc",
            SortKey::BrandDesc => "brand-desc",
            SortKey::Unsorted => "unsorted",
        }
    }
}

/// The four filter dimensions plus the sort order of the derived view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub brand: BrandFilter,
    pub price_min: f64,
    pub price_max: f64,
    pub search_text: String,
    pub sort_key: SortKey,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            brand: BrandFilter::All,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            search_text: String::new(),
            sort_key: SortKey::PriceAsc,
        }
    }
}

impl FilterConfig {
    /// Reads `brand`, `min`, `max`, `q` and `sort` from a URL query.
    ///
    /// Mirrors the filter bar inputs: a blank or invalid minimum is 0, a blank,
    /// invalid or zero maximum is 9999.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut config = FilterConfig::default();
        let Some(query) = query else {
            return config;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "brand" => config.brand = BrandFilter::parse(&value),
                "min" => config.price_min = parse_price(&value).unwrap_or(DEFAULT_PRICE_MIN),
                "max" => {
                    config.price_max = parse_price(&value)
                        .filter(|max| *max != 0.0)
                        .unwrap_or(DEFAULT_PRICE_MAX)
                }
                "q" => config.search_text = value.into_owned(),
                "sort" => config.sort_key = SortKey::parse(&value),
                _ => {}
            }
        }

        config
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("brand", self.brand.as_str())
            .append_pair("min", &self.price_min.to_string())
            .append_pair("max", &self.price_max.to_string())
            .append_pair("q", &self.search_text)
            .append_pair("sort", self.sort_key.as_str())
            .finish()
    }

    pub fn is_default(&self) -> bool {
        *self == FilterConfig::default()
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Filters then sorts `records` into the view to render.
///
/// Pure: the same inputs always give the same sequence and `records` is only read.
pub fn derive<'a>(records: &'a [ListingRecord], config: &FilterConfig) -> Vec<&'a ListingRecord> {
    let search = config.search_text.to_lowercase();

    let mut view: Vec<&ListingRecord> = records
        .iter()
        .filter(|r| brand_matches(r, config))
        .filter(|r| price_in_range(r, config))
        .filter(|r| text_matches(r, &search))
        .collect();

    // sort_by is stable, equal keys keep their filtered order
    match config.sort_key {
        SortKey::PriceAsc => view.sort_by(|a, b| compare_price(a, b)),
        SortKey::PriceDesc => view.sort_by(|a, b| compare_price(b, a)),
        SortKey::BrandAsc => {
            let mut collator = LocaleCollator::default();
            view.sort_by(|a, b| collator.compare(&a.brand, &b.brand))
        }
        SortKey::BrandDesc => {
            let mut collator = LocaleCollator::default();
            view.sort_by(|a, b| collator.compare(&b.brand, &a.brand))
        }
        SortKey::Unsorted => {}
    }

    view
}

fn brand_matches(record: &ListingRecord, config: &FilterConfig) -> bool {
    config.brand.matches(&record.brand)
}

fn price_in_range(record: &ListingRecord, config: &FilterConfig) -> bool {
    let price = record.effective_price();
    price >= config.price_min && price <= config.price_max
}

/// `search` must already be lowercased; an empty search matches everything.
fn text_matches(record: &ListingRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    [
        Some(record.brand.as_str()),
        record.model.as_deref(),
        record.version.as_deref(),
    ]
    .into_iter()
    .any(|field| field.unwrap_or("").to_lowercase().contains(search))
}

fn compare_price(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    a.effective_price()
        .partial_cmp(&b.effective_price())
        .unwrap_or(Ordering::Equal)
}
