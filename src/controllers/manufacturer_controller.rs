use crate::forms::ManufacturerForm;
use crate::models::Manufacturer;
use crate::repositories::ManufacturerRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use tracing::info;

pub struct ManufacturerController {
    repository: ManufacturerRepository,
}

impl ManufacturerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManufacturerRepository::new(pool),
        }
    }

    pub async fn create(&self, form: &ManufacturerForm) -> Result<Manufacturer, AppError> {
        let new_manufacturer = form.validated()?;
        let manufacturer = self.repository.create(&new_manufacturer).await?;

        info!("🏭 Manufacturer {} created: {}", manufacturer.id, manufacturer.name);
        Ok(manufacturer)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Manufacturer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Manufacturer", id))
    }

    pub async fn list(&self) -> Result<Vec<Manufacturer>, AppError> {
        self.repository.list_all().await
    }

    pub async fn update(&self, id: i32, form: &ManufacturerForm) -> Result<Manufacturer, AppError> {
        let new_manufacturer = form.validated()?;
        let manufacturer = self
            .repository
            .update(id, &new_manufacturer)
            .await?
            .ok_or_else(|| not_found_error("Manufacturer", id))?;

        info!("🏭 Manufacturer {} updated", id);
        Ok(manufacturer)
    }

    /// Refused while car models still reference the manufacturer.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Manufacturer", id));
        }

        info!("🗑️ Manufacturer {} deleted", id);
        Ok(())
    }
}
