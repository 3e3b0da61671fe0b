//! Data models
//!
//! Row types that map the PostgreSQL tables one to one, the validated
//! insert types, and the car listing filter.

pub mod car;
pub mod car_filter;
pub mod car_model;
pub mod manufacturer;

pub use car::{Car, NewCar};
pub use car_filter::{CarFilter, FilterPlan};
pub use car_model::{CarModel, NewCarModel};
pub use manufacturer::{Manufacturer, NewManufacturer};
