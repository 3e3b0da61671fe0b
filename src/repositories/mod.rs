//! Repositories
//!
//! One repository per table. Each owns a clone of the pool and runs plain
//! SQL through sqlx; every write is a single statement.

pub mod car_model_repository;
pub mod car_repository;
pub mod manufacturer_repository;

pub use car_model_repository::CarModelRepository;
pub use car_repository::CarRepository;
pub use manufacturer_repository::ManufacturerRepository;
