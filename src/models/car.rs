//! Car model
//!
//! Maps the `cars` table. A car belongs to one car model and, through it,
//! to one manufacturer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Car row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub model_id: i32,
    pub color: Option<String>,
    pub horsepower: Option<i32>,
    pub consumption: Option<f64>,
    pub manufacture_date: Option<NaiveDate>,
    pub is_drivable: Option<bool>,
}

/// Validated values for inserting or replacing a car
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub model_id: i32,
    pub color: Option<String>,
    pub horsepower: Option<i32>,
    pub consumption: Option<f64>,
    pub manufacture_date: Option<NaiveDate>,
    pub is_drivable: Option<bool>,
}
