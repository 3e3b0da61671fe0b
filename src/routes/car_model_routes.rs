use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::CarModelController;
use crate::dto::ApiResponse;
use crate::forms::CarModelForm;
use crate::models::CarModel;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiPath, ApiQuery};

pub fn create_car_model_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_car_models).post(create_car_model))
        .route(
            "/:id",
            get(get_car_model).put(update_car_model).delete(delete_car_model),
        )
}

#[derive(Debug, Deserialize)]
struct CarModelListQuery {
    manufacturer_id: Option<i32>,
}

async fn create_car_model(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<CarModelForm>,
) -> Result<(StatusCode, Json<ApiResponse<CarModel>>), AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let car_model = controller.create(&form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(car_model, "Car model created")),
    ))
}

async fn list_car_models(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CarModelListQuery>,
) -> Result<Json<Vec<CarModel>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    Ok(Json(controller.list(query.manufacturer_id).await?))
}

async fn get_car_model(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<CarModel>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_car_model(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(form): ApiJson<CarModelForm>,
) -> Result<Json<ApiResponse<CarModel>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let car_model = controller.update(id, &form).await?;
    Ok(Json(ApiResponse::success_with_message(car_model, "Car model updated")))
}

async fn delete_car_model(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Car model deleted")))
}
