mod api_tests;
mod catalog_tests;
mod upload_tests;
