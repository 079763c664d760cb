use crate::errors::ServerError;
use crate::feed::ListingRecord;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

const HEADERS: [&str; 16] = [
    "ID",
    "Marca",
    "Modelo",
    "Versión",
    "Cuota (€/mes)",
    "Meses",
    "Km/año",
    "Combustible",
    "Cambio",
    "Plazas",
    "Potencia (CV)",
    "Color",
    "Distintivo",
    "Promoción",
    "Opciones de renting",
    "Imagen",
];

/// Writes the listings, in the given order, to an in-memory workbook.
pub fn listings_workbook(listings: &[&ListingRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, listing)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn write_row(worksheet: &mut Worksheet, r: u32, listing: &ListingRecord) -> Result<(), ServerError> {
    let text_cells: [(u16, Option<&str>); 13] = [
        (0, Some(listing.id.as_str())),
        (1, Some(listing.brand.as_str())),
        (2, listing.model.as_deref()),
        (3, listing.version.as_deref()),
        (5, listing.price_details.months.as_deref()),
        (6, listing.price_details.km.as_deref()),
        (7, listing.fuel.as_deref()),
        (8, listing.transmission.as_deref()),
        (9, listing.seats.as_deref()),
        (10, listing.power.as_deref()),
        (11, listing.color.as_deref()),
        (12, listing.emissions_badge.as_deref()),
        (15, listing.main_image()),
    ];

    for (col, value) in text_cells {
        worksheet
            .write_string(r, col, value.unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col as usize], e)))?;
    }

    if let Some(price) = listing.price {
        worksheet
            .write_number(r, 4, price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;
    }

    worksheet
        .write_string(r, 13, if listing.on_promotion { "Sí" } else { "No" })
        .map_err(|e| ServerError::XlsxError(format!("Failed to write promotion: {}", e)))?;

    worksheet
        .write_number(r, 14, listing.all_offers.len() as f64)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write offers: {}", e)))?;

    Ok(())
}

pub fn export_listings_xlsx(listings: &[&ListingRecord]) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, "catalogo_renting.xlsx")
}
