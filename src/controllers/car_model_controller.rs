use crate::forms::{CarModelForm, FormChoices};
use crate::models::CarModel;
use crate::repositories::CarModelRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::info;

pub struct CarModelController {
    pool: PgPool,
    repository: CarModelRepository,
}

impl CarModelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarModelRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, form: &CarModelForm) -> Result<CarModel, AppError> {
        let choices = FormChoices::load(&self.pool).await?;
        self.create_with_choices(form, &choices).await
    }

    /// Create against a snapshot the caller already loaded.
    pub async fn create_with_choices(
        &self,
        form: &CarModelForm,
        choices: &FormChoices,
    ) -> Result<CarModel, AppError> {
        let new_model = form.validated(choices)?;
        let car_model = self.repository.create(&new_model).await?;

        info!(
            "🚘 Car model {} created: {} (manufacturer {})",
            car_model.id, car_model.name, car_model.manufacturer_id
        );
        Ok(car_model)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CarModel, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car model", id))
    }

    pub async fn list(&self, manufacturer_id: Option<i32>) -> Result<Vec<CarModel>, AppError> {
        match manufacturer_id {
            Some(manufacturer_id) => self.repository.find_by_manufacturer(manufacturer_id).await,
            None => self.repository.list_all().await,
        }
    }

    pub async fn update(&self, id: i32, form: &CarModelForm) -> Result<CarModel, AppError> {
        let choices = FormChoices::load(&self.pool).await?;
        let new_model = form.validated(&choices)?;
        let car_model = self
            .repository
            .update(id, &new_model)
            .await?
            .ok_or_else(|| not_found_error("Car model", id))?;

        info!("🚘 Car model {} updated", id);
        Ok(car_model)
    }

    /// Refused while cars still reference the model.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Car model", id));
        }

        info!("🗑️ Car model {} deleted", id);
        Ok(())
    }
}
