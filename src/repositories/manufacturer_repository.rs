use crate::models::manufacturer::{Manufacturer, NewManufacturer};
use crate::utils::errors::{delete_error, AppError};
use sqlx::PgPool;

pub struct ManufacturerRepository {
    pool: PgPool,
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, manufacturer: &NewManufacturer) -> Result<Manufacturer, AppError> {
        let result = sqlx::query_as::<_, Manufacturer>(
            r#"
            INSERT INTO manufacturers (name, street, city, zip_code, country)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&manufacturer.name)
        .bind(&manufacturer.street)
        .bind(&manufacturer.city)
        .bind(&manufacturer.zip_code)
        .bind(&manufacturer.country)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>, AppError> {
        let result = sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Manufacturer>, AppError> {
        let result = sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(
        &self,
        id: i32,
        manufacturer: &NewManufacturer,
    ) -> Result<Option<Manufacturer>, AppError> {
        let result = sqlx::query_as::<_, Manufacturer>(
            r#"
            UPDATE manufacturers
            SET name = $2, street = $3, city = $4, zip_code = $5, country = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&manufacturer.name)
        .bind(&manufacturer.street)
        .bind(&manufacturer.city)
        .bind(&manufacturer.zip_code)
        .bind(&manufacturer.country)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Returns `false` when no such manufacturer existed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Manufacturer", id, e))?;

        Ok(result.rows_affected() > 0)
    }
}
