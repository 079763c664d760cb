use crate::router::handle;
use crate::tests::utils::{
    body_string, feed_xml, full_feed, get, post, post_xml, test_state, FORD_FOCUS, KIA_CEED,
    NO_BRAND,
};
use astra::Body;
use http::{Method, Request};

#[test]
fn upload_loads_catalog_and_redirects() {
    let state = test_state();

    let resp = handle(post_xml("/upload?name=stock%20junio.xml", &full_feed()), &state)
        .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");

    let snapshot = state.catalog.snapshot();
    let loaded = snapshot.loaded.as_ref().unwrap();
    assert_eq!(loaded.info.name, "stock junio.xml");
    assert_eq!(loaded.info.vehicle_count, 5);
    assert_eq!(loaded.info.brand_count, 4);
    assert!(snapshot.error.is_none());
}

#[test]
fn brandless_entries_are_dropped_on_upload() {
    let state = test_state();

    handle(post_xml("/upload", &feed_xml(&[FORD_FOCUS, NO_BRAND, KIA_CEED])), &state).unwrap();

    let snapshot = state.catalog.snapshot();
    assert_eq!(snapshot.records().len(), 2);
    assert_eq!(snapshot.brands(), ["Ford".to_string(), "Kia".to_string()]);
    assert_eq!(snapshot.loaded.unwrap().info.name, "catalogo.xml");
}

#[test]
fn malformed_upload_shows_error_and_keeps_previous_data() {
    let state = test_state();
    handle(post_xml("/upload?name=good.xml", &full_feed()), &state).unwrap();

    let resp = handle(post_xml("/upload?name=bad.xml", "<anuncios><anuncio>"), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let snapshot = state.catalog.snapshot();
    assert_eq!(snapshot.records().len(), 5);
    assert_eq!(snapshot.loaded.as_ref().unwrap().info.name, "good.xml");

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Invalid XML format"));
    assert!(body.contains("Focus"));
}

#[test]
fn upload_without_entries_reports_no_vehicles() {
    let state = test_state();

    handle(post_xml("/upload", "<anuncios></anuncios>"), &state).unwrap();

    let snapshot = state.catalog.snapshot();
    assert!(snapshot.loaded.is_none());
    assert_eq!(snapshot.error.as_deref(), Some("No vehicles found in XML"));

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("No vehicles found in XML"));
    assert!(body.contains("Cargar Catálogo XML"));
}

#[test]
fn non_xml_upload_is_rejected() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header("Content-Type", "image/png")
        .body(Body::from("not xml"))
        .unwrap();

    let err = handle(req, &state).unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert!(state.catalog.snapshot().loaded.is_none());
}

#[test]
fn new_file_clears_catalog() {
    let state = test_state();
    handle(post_xml("/upload", &full_feed()), &state).unwrap();

    let resp = handle(post("/catalog/clear"), &state).unwrap();

    assert_eq!(resp.status(), 303);
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Cargar Catálogo XML"));
}

#[test]
fn fetch_without_provider_asks_for_one() {
    let state = test_state();

    let resp = handle(post("/fetch"), &state).unwrap();

    assert_eq!(resp.status(), 303);
    assert!(state
        .catalog
        .snapshot()
        .error
        .unwrap()
        .contains("Seleccione un proveedor"));
}

#[test]
fn fetch_without_feed_url_reports_it() {
    let state = test_state();
    handle(post("/providers/santander/toggle"), &state).unwrap();

    handle(post("/fetch"), &state).unwrap();

    assert!(state
        .catalog
        .snapshot()
        .error
        .unwrap()
        .contains("URL"));
}
