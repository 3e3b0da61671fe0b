use crate::forms::{CarFilterForm, CarForm, FormChoices};
use crate::models::Car;
use crate::repositories::CarRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::info;

pub struct CarController {
    pool: PgPool,
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, form: &CarForm) -> Result<Car, AppError> {
        let choices = FormChoices::load(&self.pool).await?;
        self.create_with_choices(form, &choices).await
    }

    /// Create against a snapshot the caller already loaded.
    pub async fn create_with_choices(
        &self,
        form: &CarForm,
        choices: &FormChoices,
    ) -> Result<Car, AppError> {
        let new_car = form.validated(choices)?;
        let car = self.repository.create(&new_car).await?;

        info!("🚗 Car {} created (model {})", car.id, car.model_id);
        Ok(car)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Car, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))
    }

    pub async fn list_filtered(&self, filter: &CarFilterForm) -> Result<Vec<Car>, AppError> {
        let filter = filter.to_filter()?;
        self.repository.list_filtered(&filter).await
    }

    pub async fn update(&self, id: i32, form: &CarForm) -> Result<Car, AppError> {
        let choices = FormChoices::load(&self.pool).await?;
        let new_car = form.validated(&choices)?;
        let car = self
            .repository
            .update(id, &new_car)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        info!("🚗 Car {} updated", id);
        Ok(car)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Car", id));
        }

        info!("🗑️ Car {} deleted", id);
        Ok(())
    }
}
