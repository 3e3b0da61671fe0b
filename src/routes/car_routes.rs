use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::CarController;
use crate::dto::ApiResponse;
use crate::forms::{CarFilterForm, CarForm};
use crate::models::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiPath, ApiQuery};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).put(update_car).delete(delete_car))
}

async fn create_car(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<CarForm>,
) -> Result<(StatusCode, Json<ApiResponse<Car>>), AppError> {
    let controller = CarController::new(state.pool.clone());
    let car = controller.create(&form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(car, "Car created")),
    ))
}

/// `?manufacturer=<id>&car_model=<id>`, both optional
async fn list_cars(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<CarFilterForm>,
) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    Ok(Json(controller.list_filtered(&filter).await?))
}

async fn get_car(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Car>, AppError> {
    let controller = CarController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_car(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(form): ApiJson<CarForm>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let car = controller.update(id, &form).await?;
    Ok(Json(ApiResponse::success_with_message(car, "Car updated")))
}

async fn delete_car(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Car deleted")))
}
