//! Database module
//!
//! Connection pool, schema and migrations for PostgreSQL.

pub mod connection;
pub mod schema;

pub use connection::{create_pool, mask_database_url, run_migrations};
