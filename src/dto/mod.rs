//! Data transfer objects
//!
//! Shapes returned by the API and handed to the page renderers.

pub mod api_response;
pub mod catalog_dto;

pub use api_response::ApiResponse;
pub use catalog_dto::CatalogOverview;
