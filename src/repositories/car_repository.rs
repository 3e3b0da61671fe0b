use crate::models::car::{Car, NewCar};
use crate::models::car_filter::CarFilter;
use crate::utils::errors::{write_error, AppError};
use sqlx::PgPool;
use tracing::debug;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car: &NewCar) -> Result<Car, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (model_id, color, horsepower, consumption, manufacture_date, is_drivable)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(car.model_id)
        .bind(&car.color)
        .bind(car.horsepower)
        .bind(car.consumption)
        .bind(car.manufacture_date)
        .bind(car.is_drivable)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("car", e))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_model(&self, model_id: i32) -> Result<Vec<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE model_id = $1 ORDER BY id")
            .bind(model_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    /// Cars matching the filter. Unknown ids give an empty list.
    pub async fn list_filtered(&self, filter: &CarFilter) -> Result<Vec<Car>, AppError> {
        debug!("Listing cars with plan {:?}", filter.plan());

        let mut query = filter.query();
        let result = query
            .build_query_as::<Car>()
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i32, car: &NewCar) -> Result<Option<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET model_id = $2, color = $3, horsepower = $4, consumption = $5,
                manufacture_date = $6, is_drivable = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car.model_id)
        .bind(&car.color)
        .bind(car.horsepower)
        .bind(car.consumption)
        .bind(car.manufacture_date)
        .bind(car.is_drivable)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("car", e))?;

        Ok(result)
    }

    /// Returns `false` when no such car existed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
