use crate::domain::{derive, FilterConfig};
use crate::errors::ServerError;
use crate::feed::ListingRecord;
use crate::responses::{css_response, html_response, json_response, see_other, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::state::AppState;
use crate::templates::pages::{catalog_page, home_page, CatalogVm};
use astra::Request;
use serde::Serialize;
use std::io::Read;
use tracing::{debug, info};
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");
const DEFAULT_UPLOAD_NAME: &str = "catalogo.xml";

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    debug!("{method} {path}");

    if method == "POST" {
        if let Some(id) = provider_toggle_id(&path) {
            return toggle_provider(state, id);
        }
    }

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => index(state, query.as_deref()),
        ("POST", "/upload") => upload(&mut req, state, query.as_deref()),
        ("POST", "/fetch") => fetch(state),
        ("POST", "/catalog/clear") => {
            state.catalog.clear();
            see_other("/")
        }
        ("GET", "/api/listings") => api_listings(state, query.as_deref()),
        ("GET", "/export") => export(state, query.as_deref()),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn index(state: &AppState, query: Option<&str>) -> ResultResp {
    let snapshot = state.catalog.snapshot();

    let Some(loaded) = snapshot.loaded.as_ref().filter(|_| snapshot.has_listings()) else {
        return html_response(home_page(
            snapshot.error.as_deref(),
            &state.providers.current(),
            state.remote.is_some(),
        ));
    };

    let config = FilterConfig::from_query(query);
    let listings = derive(&loaded.records, &config);

    html_response(catalog_page(&CatalogVm {
        info: &loaded.info,
        brands: &loaded.brands,
        config: &config,
        listings: &listings,
        total: loaded.records.len(),
        error: snapshot.error.as_deref(),
        image_proxy: state.image_proxy.as_deref(),
    }))
}

fn upload(req: &mut Request, state: &AppState, query: Option<&str>) -> ResultResp {
    if let Some(content_type) = req.headers().get("Content-Type") {
        let content_type = content_type
            .to_str()
            .map_err(|_| ServerError::BadRequest("Invalid Content-Type".into()))?;
        if !is_xml_upload(content_type) {
            return Err(ServerError::BadRequest(format!(
                "Expected an XML file, got {content_type}"
            )));
        }
    }

    let name = query
        .and_then(|q| query_param(q, "name"))
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Could not read upload: {e}")))?;
    let text = String::from_utf8_lossy(&bytes);

    info!("📄 Processing upload {name} ({} bytes)", bytes.len());

    // failures are kept on the catalog and shown on the next page load
    if let Err(e) = state.catalog.ingest(&state.normalizer, &name, &text) {
        debug!("Upload {name} not loaded: {e}");
    }
    see_other("/")
}

fn fetch(state: &AppState) -> ResultResp {
    if state.providers.current().is_empty() {
        state.catalog.record_failure("Seleccione un proveedor antes de descargar el catálogo");
        return see_other("/");
    }

    let Some(remote) = state.remote.as_ref() else {
        state.catalog.record_failure("No hay ninguna URL de catálogo configurada");
        return see_other("/");
    };

    match remote.client.fetch(&remote.url) {
        Ok(text) => {
            let name = format!(
                "{}{}",
                remote.url.host_str().unwrap_or_default(),
                remote.url.path()
            );
            if let Err(e) = state.catalog.ingest(&state.normalizer, &name, &text) {
                debug!("Fetched feed {name} not loaded: {e}");
            }
        }
        Err(e) => state.catalog.record_failure(e.to_string()),
    }

    see_other("/")
}

fn toggle_provider(state: &AppState, id: &str) -> ResultResp {
    state
        .providers
        .toggle(id)
        .ok_or_else(|| ServerError::BadRequest(format!("Unknown provider {id}")))?;
    see_other("/")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingJson<'a> {
    #[serde(flatten)]
    record: &'a ListingRecord,
    main_image: Option<&'a str>,
}

#[derive(Serialize)]
struct ListingsJson<'a> {
    total: usize,
    count: usize,
    brands: &'a [String],
    config: &'a FilterConfig,
    listings: Vec<ListingJson<'a>>,
}

fn api_listings(state: &AppState, query: Option<&str>) -> ResultResp {
    let snapshot = state.catalog.snapshot();
    let config = FilterConfig::from_query(query);
    let view = derive(snapshot.records(), &config);

    json_response(&ListingsJson {
        total: snapshot.records().len(),
        count: view.len(),
        brands: snapshot.brands(),
        config: &config,
        listings: view
            .into_iter()
            .map(|record| ListingJson {
                record,
                main_image: record.main_image(),
            })
            .collect(),
    })
}

fn export(state: &AppState, query: Option<&str>) -> ResultResp {
    let snapshot = state.catalog.snapshot();
    let config = FilterConfig::from_query(query);
    let view = derive(snapshot.records(), &config);

    info!("📊 Exporting {} listings", view.len());
    export_listings_xlsx(&view)
}

fn provider_toggle_id(path: &str) -> Option<&str> {
    path.strip_prefix("/providers/")?
        .strip_suffix("/toggle")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// XML media types, plus the generic ones browsers send for unknown files.
fn is_xml_upload(content_type: &str) -> bool {
    let Ok(parsed) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    parsed.subtype() == mime::XML
        || parsed.suffix() == Some(mime::XML)
        || parsed.essence_str() == mime::TEXT_PLAIN.essence_str()
        || parsed.essence_str() == mime::APPLICATION_OCTET_STREAM.essence_str()
}
