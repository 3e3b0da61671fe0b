//! Controllers
//!
//! Glue between routes and repositories: validate the submitted form,
//! run the query, map missing rows to `NotFound`.

pub mod car_controller;
pub mod car_model_controller;
pub mod catalog_controller;
pub mod manufacturer_controller;

pub use car_controller::CarController;
pub use car_model_controller::CarModelController;
pub use catalog_controller::CatalogController;
pub use manufacturer_controller::ManufacturerController;
