use crate::dto::CatalogOverview;
use crate::forms::{CarFilterForm, FormChoices};
use crate::repositories::{CarModelRepository, CarRepository, ManufacturerRepository};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CatalogController {
    manufacturers: ManufacturerRepository,
    car_models: CarModelRepository,
    cars: CarRepository,
}

impl CatalogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            manufacturers: ManufacturerRepository::new(pool.clone()),
            car_models: CarModelRepository::new(pool.clone()),
            cars: CarRepository::new(pool),
        }
    }

    /// Manufacturers, models and the filtered car list for the index page.
    pub async fn overview(&self, filter: &CarFilterForm) -> Result<CatalogOverview, AppError> {
        let filter = filter.to_filter()?;

        let manufacturers = self.manufacturers.list_all().await?;
        let car_models = self.car_models.list_all().await?;
        let cars = self.cars.list_filtered(&filter).await?;
        let choices = FormChoices::from_rows(&manufacturers, &car_models);

        Ok(CatalogOverview {
            manufacturers,
            car_models,
            cars,
            filter,
            choices,
        })
    }
}
