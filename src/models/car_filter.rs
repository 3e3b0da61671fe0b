//! Car listing filter
//!
//! Narrows the car list by manufacturer and/or car model. Both criteria are
//! optional; an id that matches nothing simply yields an empty list.

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

const SELECT_CARS: &str = "SELECT c.id, c.model_id, c.color, c.horsepower, c.consumption, \
     c.manufacture_date, c.is_drivable FROM cars c";

const JOIN_MODELS: &str = " JOIN car_models m ON m.id = c.model_id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarFilter {
    pub manufacturer_id: Option<i32>,
    pub model_id: Option<i32>,
}

/// Which query a filter resolves to. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPlan {
    /// Cars of one model, which must also belong to the manufacturer.
    ModelOfManufacturer { manufacturer_id: i32, model_id: i32 },
    /// Cars of every model the manufacturer owns.
    Manufacturer(i32),
    Model(i32),
    All,
}

impl CarFilter {
    pub fn new(manufacturer_id: Option<i32>, model_id: Option<i32>) -> Self {
        Self {
            manufacturer_id,
            model_id,
        }
    }

    pub fn plan(&self) -> FilterPlan {
        match (self.manufacturer_id, self.model_id) {
            (Some(manufacturer_id), Some(model_id)) => FilterPlan::ModelOfManufacturer {
                manufacturer_id,
                model_id,
            },
            (Some(manufacturer_id), None) => FilterPlan::Manufacturer(manufacturer_id),
            (None, Some(model_id)) => FilterPlan::Model(model_id),
            (None, None) => FilterPlan::All,
        }
    }

    /// Build the `SELECT` for this filter with its ids bound as parameters.
    pub fn query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_CARS);

        match self.plan() {
            FilterPlan::ModelOfManufacturer {
                manufacturer_id,
                model_id,
            } => {
                builder.push(JOIN_MODELS);
                builder.push(" WHERE c.model_id = ");
                builder.push_bind(model_id);
                builder.push(" AND m.manufacturer_id = ");
                builder.push_bind(manufacturer_id);
            }
            FilterPlan::Manufacturer(manufacturer_id) => {
                builder.push(JOIN_MODELS);
                builder.push(" WHERE m.manufacturer_id = ");
                builder.push_bind(manufacturer_id);
            }
            FilterPlan::Model(model_id) => {
                builder.push(" WHERE c.model_id = ");
                builder.push_bind(model_id);
            }
            FilterPlan::All => {}
        }

        builder.push(" ORDER BY c.id");
        builder
    }
}
