use serde::Serialize;

use crate::forms::FormChoices;
use crate::models::{Car, CarFilter, CarModel, Manufacturer};

// Everything the index page shows
#[derive(Debug, Serialize)]
pub struct CatalogOverview {
    pub manufacturers: Vec<Manufacturer>,
    pub car_models: Vec<CarModel>,
    pub cars: Vec<Car>,
    pub filter: CarFilter,
    pub choices: FormChoices,
}
