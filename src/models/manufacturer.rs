//! Manufacturer model
//!
//! Maps the `manufacturers` table. Only `name` is mandatory; the address
//! columns are nullable.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Manufacturer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Validated values for inserting or replacing a manufacturer
#[derive(Debug, Clone, PartialEq)]
pub struct NewManufacturer {
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}
