//! CarModel model
//!
//! Maps the `car_models` table. Every model belongs to exactly one
//! manufacturer through `manufacturer_id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Car model row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CarModel {
    pub id: i32,
    pub manufacturer_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub release_year: Option<i32>,
    pub is_active: Option<bool>,
}

/// Validated values for inserting or replacing a car model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCarModel {
    pub manufacturer_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub release_year: Option<i32>,
    pub is_active: Option<bool>,
}
