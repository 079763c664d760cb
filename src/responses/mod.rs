pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;
pub mod stylesheet;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::html_response;
pub use json::json_response;
pub use redirect::see_other;
pub use stylesheet::css_response;
pub use xlsx::xlsx_response;
