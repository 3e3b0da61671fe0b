//! Project configuration
//!
//! Database and server settings read from the environment.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
