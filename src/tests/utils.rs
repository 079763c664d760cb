use crate::feed::{ListingRecord, PriceDetails};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub const FORD_FOCUS: &str = "<anuncio>\
    <motorflashID><![CDATA[MF-1]]></motorflashID>\
    <marca><![CDATA[Ford]]></marca><modelo><![CDATA[Focus]]></modelo>\
    <version><![CDATA[1.0 Ecoboost Trend+]]></version>\
    <renting><ofertaRenting><cuota>150</cuota><meses>36</meses><km>10000</km></ofertaRenting></renting>\
    <fotos><foto><![CDATA[https://img.example.com/focus-1.jpg]]></foto></fotos>\
    <cambio>Manual</cambio><distintivo>C</distintivo>\
    </anuncio>";

pub const FORD_KUGA: &str = "<anuncio>\
    <motorflashID>MF-2</motorflashID>\
    <marca>Ford</marca><modelo>Kuga</modelo>\
    <renting>\
      <ofertaRenting><cuota>390</cuota><meses>24</meses><km>15000</km></ofertaRenting>\
      <ofertaRenting><cuota>350</cuota><meses>48</meses><km>20000</km></ofertaRenting>\
    </renting>\
    </anuncio>";

pub const KIA_CEED: &str = "<anuncio>\
    <motorflashID>MF-3</motorflashID>\
    <marca>Kia</marca><modelo>Ceed</modelo><version>1.5 MHEV Drive</version>\
    <renting><ofertaRenting><cuota>299</cuota><meses>36</meses><km>10000</km></ofertaRenting></renting>\
    </anuncio>";

pub const SEAT_IBIZA: &str = "<anuncio>\
    <motorflashID>MF-4</motorflashID>\
    <marca>Seat</marca><modelo>Ibiza</modelo>\
    <renting><ofertaRenting><cuota>210</cuota><meses>36</meses><km>10000</km></ofertaRenting></renting>\
    <vehiculo_en_promocion>SI</vehiculo_en_promocion>\
    </anuncio>";

pub const TOYOTA_CHR: &str = "<anuncio>\
    <motorflashID>MF-5</motorflashID>\
    <marca>Toyota</marca><modelo>C-HR</modelo>\
    </anuncio>";

pub const NO_BRAND: &str = "<anuncio><motorflashID>MF-X</motorflashID><modelo>Sin marca</modelo></anuncio>";

pub fn feed_xml(entries: &[&str]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<anuncios>{}</anuncios>",
        entries.concat()
    )
}

pub fn full_feed() -> String {
    feed_xml(&[FORD_FOCUS, FORD_KUGA, KIA_CEED, SEAT_IBIZA, TOYOTA_CHR])
}

/// Minimal record for pipeline tests.
pub fn listing(id: &str, brand: &str, price: Option<f64>) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        dealer_id: None,
        brand: brand.to_string(),
        model: None,
        version: None,
        price,
        price_details: PriceDetails::default(),
        all_offers: Vec::new(),
        images: Vec::new(),
        fuel: None,
        transmission: None,
        seats: None,
        doors: None,
        color: None,
        power: None,
        kilometers: None,
        estado: None,
        disponible: None,
        emissions: None,
        emissions_badge: None,
        fuel_consumption_combined: None,
        body_type: None,
        on_promotion: false,
    }
}

/// Fresh state with no online feed configured.
pub fn test_state() -> AppState {
    AppState::default()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_xml(uri: &str, xml: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "text/xml")
        .body(Body::from(xml.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
