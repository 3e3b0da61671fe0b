//! Selector choices
//!
//! Snapshot of the manufacturers and car models that selector fields may
//! reference. Loaded once per request, then passed to validation and to the
//! page renderers.

use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::models::{CarModel, Manufacturer};
use crate::repositories::{CarModelRepository, ManufacturerRepository};
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormChoices {
    pub manufacturers: Vec<Choice>,
    pub car_models: Vec<Choice>,
}

impl FormChoices {
    /// Read the current manufacturers and car models.
    pub async fn load(pool: &PgPool) -> AppResult<Self> {
        let manufacturers = ManufacturerRepository::new(pool.clone()).list_all().await?;
        let car_models = CarModelRepository::new(pool.clone()).list_all().await?;
        Ok(Self::from_rows(&manufacturers, &car_models))
    }

    /// Car models are labelled with their manufacturer's name.
    pub fn from_rows(manufacturers: &[Manufacturer], car_models: &[CarModel]) -> Self {
        let names: HashMap<i32, &str> = manufacturers
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();

        Self {
            manufacturers: manufacturers
                .iter()
                .map(|m| Choice {
                    id: m.id,
                    label: m.name.clone(),
                })
                .collect(),
            car_models: car_models
                .iter()
                .map(|model| Choice {
                    id: model.id,
                    label: match names.get(&model.manufacturer_id) {
                        Some(manufacturer) => format!("{} {}", manufacturer, model.name),
                        None => model.name.clone(),
                    },
                })
                .collect(),
        }
    }

    pub fn manufacturer_ids(&self) -> Vec<i32> {
        self.manufacturers.iter().map(|c| c.id).collect()
    }

    pub fn car_model_ids(&self) -> Vec<i32> {
        self.car_models.iter().map(|c| c.id).collect()
    }
}
