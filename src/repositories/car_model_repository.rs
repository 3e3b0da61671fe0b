use crate::models::car_model::{CarModel, NewCarModel};
use crate::utils::errors::{delete_error, write_error, AppError};
use sqlx::PgPool;

pub struct CarModelRepository {
    pool: PgPool,
}

impl CarModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car_model: &NewCarModel) -> Result<CarModel, AppError> {
        let result = sqlx::query_as::<_, CarModel>(
            r#"
            INSERT INTO car_models (manufacturer_id, name, category, price_range, release_year, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(car_model.manufacturer_id)
        .bind(&car_model.name)
        .bind(&car_model.category)
        .bind(&car_model.price_range)
        .bind(car_model.release_year)
        .bind(car_model.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("car model", e))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CarModel>, AppError> {
        let result = sqlx::query_as::<_, CarModel>("SELECT * FROM car_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_manufacturer(&self, manufacturer_id: i32) -> Result<Vec<CarModel>, AppError> {
        let result = sqlx::query_as::<_, CarModel>(
            "SELECT * FROM car_models WHERE manufacturer_id = $1 ORDER BY id",
        )
        .bind(manufacturer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<CarModel>, AppError> {
        let result = sqlx::query_as::<_, CarModel>("SELECT * FROM car_models ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i32, car_model: &NewCarModel) -> Result<Option<CarModel>, AppError> {
        let result = sqlx::query_as::<_, CarModel>(
            r#"
            UPDATE car_models
            SET manufacturer_id = $2, name = $3, category = $4, price_range = $5,
                release_year = $6, is_active = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car_model.manufacturer_id)
        .bind(&car_model.name)
        .bind(&car_model.category)
        .bind(&car_model.price_range)
        .bind(car_model.release_year)
        .bind(car_model.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("car model", e))?;

        Ok(result)
    }

    /// Returns `false` when no such car model existed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM car_models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Car model", id, e))?;

        Ok(result.rows_affected() > 0)
    }
}
