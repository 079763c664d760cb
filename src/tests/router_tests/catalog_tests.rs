use crate::router::handle;
use crate::tests::utils::{body_string, full_feed, get, post, post_xml, test_state};

fn loaded_state() -> crate::state::AppState {
    let state = test_state();
    handle(post_xml("/upload?name=stock.xml", &full_feed()), &state).expect("upload failed");
    state
}

#[test]
fn home_shows_uploader_when_empty() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Cargar Catálogo XML"));
    assert!(body.contains("Santander Consumer Renting"));
    // no FEED_URL configured
    assert!(!body.contains("action=\"/fetch\""));
}

#[test]
fn catalog_page_lists_every_vehicle_cheapest_first() {
    let state = loaded_state();

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("Mostrando <strong>5</strong> de 5 vehículos"));
    assert!(body.contains("stock.xml"));
    let toyota = body.find("C-HR").unwrap();
    let focus = body.find("Focus").unwrap();
    let kuga = body.find("Kuga").unwrap();
    assert!(toyota < focus && focus < kuga);
}

#[test]
fn card_shows_formatted_price_and_terms() {
    let state = loaded_state();

    let body = body_string(handle(get("/?brand=Ford&sort=price-asc"), &state).unwrap());

    assert!(body.contains("150\u{a0}€"));
    assert!(body.contains("36 meses • 10.000 km/año"));
    assert!(body.contains("350\u{a0}€"));
    assert!(body.contains("48 meses • 20.000 km/año"));
    assert!(body.contains("2 opciones de renting"));
    assert!(!body.contains("Ibiza"));
}

#[test]
fn promotion_and_on_request_prices_render() {
    let state = loaded_state();

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("PROMOCIÓN ESPECIAL"));
    assert!(body.contains("Consultar"));
}

#[test]
fn filters_can_exclude_everything() {
    let state = loaded_state();

    let body = body_string(handle(get("/?q=tesla"), &state).unwrap());

    assert!(body.contains("No se encontraron vehículos con los filtros aplicados."));
    assert!(body.contains("Mostrando <strong>0</strong> de 5 vehículos"));
}

#[test]
fn filter_bar_reflects_the_query() {
    let state = loaded_state();

    let body = body_string(handle(get("/?brand=Kia&min=100&q=ceed&sort=brand-desc"), &state).unwrap());

    assert!(body.contains("<option value=\"Kia\" selected>Kia</option>"));
    assert!(body.contains("value=\"ceed\""));
    assert!(body.contains("value=\"100\""));
    assert!(body.contains("<option value=\"brand-desc\" selected>"));
}

#[test]
fn provider_toggle_swaps_selection() {
    let state = test_state();

    let resp = handle(post("/providers/santander/toggle"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(state.providers.current().contains("santander"));

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("1 provider selected"));

    handle(post("/providers/santander/toggle"), &state).unwrap();
    assert!(state.providers.current().is_empty());
}

#[test]
fn unknown_provider_is_a_bad_request() {
    let state = test_state();

    let err = handle(post("/providers/acme/toggle"), &state).unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}

#[test]
fn stylesheet_is_served() {
    let resp = handle(get("/static/main.css"), &test_state()).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(get("/nope"), &test_state()).unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn document_order_survives_the_next_submit() {
    let state = loaded_state();

    let body = body_string(handle(get("/?sort=unsorted"), &state).unwrap());
    assert!(body.contains("<option value=\"unsorted\" selected>Orden del archivo</option>"));
    let focus = body.find("Focus").unwrap();
    let toyota = body.find("C-HR").unwrap();
    assert!(focus < toyota);

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(!body.contains("value=\"unsorted\""));
}
