// normalizer.rs
use crate::feed::feed_error::{EntryError, FeedError};
use crate::feed::fields::{
    clean_cdata, parse_float_prefix, text_content, EntryNode, ScalarField, OFFERS, OFFER_KM,
    OFFER_MONTHS, OFFER_PRICE, PHOTOS, PROMOTION_MARKER,
};
use crate::feed::models::{ListingRecord, NormalizedFeed, Offer, PriceDetails};
use roxmltree::{Document, ParsingOptions};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

pub const DEFAULT_ENTRY_TAG: &str = "anuncio";
pub const MAX_IMAGES: usize = 10;

/// Parts of the feed vocabulary that vary between deployments.
#[derive(Debug, Clone)]
pub struct FeedSchema {
    pub entry_tag: String,
    pub max_images: usize,
}

impl Default for FeedSchema {
    fn default() -> Self {
        Self {
            entry_tag: DEFAULT_ENTRY_TAG.to_string(),
            max_images: MAX_IMAGES,
        }
    }
}

/// Turns raw feed text into display-ready listing records.
#[derive(Debug, Clone, Default)]
pub struct FeedNormalizer {
    schema: FeedSchema,
}

impl FeedNormalizer {
    pub fn new(schema: FeedSchema) -> Self {
        Self { schema }
    }

    /// Parses `text` and extracts every entry that has a brand.
    ///
    /// Entries that fail extraction are logged and skipped; only a malformed
    /// document or one without entries fails the whole pass.
    pub fn normalize(&self, text: &str) -> Result<NormalizedFeed, FeedError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(text, options).map_err(|e| {
            warn!("❌ Feed is not well-formed XML: {e}");
            FeedError::MalformedDocument(e.to_string())
        })?;

        let entry_tag = self.schema.entry_tag.as_str();
        let entries: Vec<_> = document
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name(entry_tag))
            .collect();

        if entries.is_empty() {
            warn!("🏁 Feed has no <{entry_tag}> entries");
            return Err(FeedError::NoEntries);
        }

        let mut records = Vec::with_capacity(entries.len());
        let mut brands = BTreeSet::new();
        let mut skipped = 0;

        for (position, node) in entries.into_iter().enumerate() {
            match self.extract_entry(position, EntryNode::new(node)) {
                Ok(record) => {
                    brands.insert(record.brand.clone());
                    records.push(record);
                }
                Err(e @ EntryError::MissingBrand { .. }) => {
                    skipped += 1;
                    debug!("Skipping {e}");
                }
            }
        }

        info!(
            "✅ Normalized {} listings ({} brands, {skipped} skipped)",
            records.len(),
            brands.len()
        );

        Ok(NormalizedFeed {
            records,
            brands: brands.into_iter().collect(),
        })
    }

    fn extract_entry(
        &self,
        position: usize,
        entry: EntryNode,
    ) -> Result<ListingRecord, EntryError> {
        let brand = entry
            .scalar(ScalarField::Brand)
            .ok_or(EntryError::MissingBrand { position })?;

        let all_offers: Vec<Offer> = entry
            .items(OFFERS)
            .into_iter()
            .map(|node| {
                let offer = EntryNode::new(node);
                Offer {
                    price: parse_float_prefix(offer.child_text(OFFER_PRICE).as_deref()),
                    months: offer.child_text(OFFER_MONTHS),
                    km: offer.child_text(OFFER_KM),
                }
            })
            .collect();

        let (price, price_details) = match cheapest_offer(&all_offers) {
            Some(offer) => (
                Some(offer.price),
                PriceDetails {
                    months: offer.months.clone(),
                    km: offer.km.clone(),
                },
            ),
            None => (None, PriceDetails::default()),
        };

        let images: Vec<String> = entry
            .items(PHOTOS)
            .into_iter()
            .take(self.schema.max_images)
            .filter_map(|node| clean_cdata(&text_content(node)))
            .collect();

        Ok(ListingRecord {
            id: entry
                .scalar(ScalarField::Id)
                .unwrap_or_else(|| format!("listing-{position}")),
            dealer_id: entry.scalar(ScalarField::DealerId),
            brand,
            model: entry.scalar(ScalarField::Model),
            version: entry.scalar(ScalarField::Version),
            price,
            price_details,
            all_offers,
            images,
            fuel: entry.scalar(ScalarField::Fuel),
            transmission: entry.scalar(ScalarField::Transmission),
            seats: entry.scalar(ScalarField::Seats),
            doors: entry.scalar(ScalarField::Doors),
            color: entry.scalar(ScalarField::Color),
            power: entry.scalar(ScalarField::Power),
            kilometers: entry.scalar(ScalarField::Kilometers),
            estado: entry.scalar(ScalarField::Estado),
            disponible: entry.scalar(ScalarField::Disponible),
            emissions: entry.scalar(ScalarField::Emissions),
            emissions_badge: entry.scalar(ScalarField::EmissionsBadge),
            fuel_consumption_combined: entry.scalar(ScalarField::FuelConsumptionCombined),
            body_type: entry.scalar(ScalarField::BodyType),
            on_promotion: entry.scalar(ScalarField::PromotionFlag).as_deref()
                == Some(PROMOTION_MARKER),
        })
    }
}

/// First offer holding the strict minimum price. NaN prices never win.
pub fn cheapest_offer(offers: &[Offer]) -> Option<&Offer> {
    let mut best: Option<&Offer> = None;
    for offer in offers.iter().filter(|o| !o.price.is_nan()) {
        match best {
            Some(current) if !(offer.price < current.price) => {}
            _ => best = Some(offer),
        }
    }
    best
}
