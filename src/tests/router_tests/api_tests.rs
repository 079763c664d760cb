use crate::router::handle;
use crate::tests::utils::{body_string, full_feed, get, post_xml, test_state};
use serde_json::Value;

fn listings_json(state: &crate::state::AppState, uri: &str) -> Value {
    let resp = handle(get(uri), state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(resp)).expect("invalid JSON")
}

fn ids(json: &Value) -> Vec<String> {
    json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn brand_and_price_range_select_a_single_ford() {
    let state = test_state();
    handle(post_xml("/upload", &full_feed()), &state).unwrap();

    let json = listings_json(&state, "/api/listings?brand=Ford&min=200&max=400&q=&sort=price-desc");

    assert_eq!(json["total"], 5);
    assert_eq!(json["count"], 1);
    assert_eq!(ids(&json), vec!["MF-2"]);
    assert_eq!(json["listings"][0]["price"], 350.0);
    assert_eq!(json["listings"][0]["priceDetails"]["months"], "48");
    assert_eq!(json["config"]["sortKey"], "price-desc");
    assert_eq!(json["config"]["brand"], "Ford");
}

#[test]
fn default_view_sorts_by_price_with_missing_price_first() {
    let state = test_state();
    handle(post_xml("/upload", &full_feed()), &state).unwrap();

    let json = listings_json(&state, "/api/listings");

    assert_eq!(ids(&json), vec!["MF-5", "MF-1", "MF-4", "MF-3", "MF-2"]);
    assert_eq!(json["brands"], serde_json::json!(["Ford", "Kia", "Seat", "Toyota"]));
    assert_eq!(json["listings"][0]["price"], Value::Null);
    assert_eq!(
        json["listings"][1]["mainImage"],
        "https://img.example.com/focus-1.jpg"
    );
}

#[test]
fn empty_catalog_returns_empty_view() {
    let json = listings_json(&test_state(), "/api/listings");

    assert_eq!(json["total"], 0);
    assert_eq!(json["count"], 0);
    assert!(json["listings"].as_array().unwrap().is_empty());
}

#[test]
fn export_returns_a_workbook() {
    let state = test_state();
    handle(post_xml("/upload", &full_feed()), &state).unwrap();

    let resp = handle(get("/export?brand=Ford"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("catalogo_renting.xlsx"));
}
