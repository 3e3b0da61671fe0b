use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::ManufacturerController;
use crate::dto::ApiResponse;
use crate::forms::ManufacturerForm;
use crate::models::Manufacturer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiPath};

pub fn create_manufacturer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_manufacturers).post(create_manufacturer))
        .route(
            "/:id",
            get(get_manufacturer)
                .put(update_manufacturer)
                .delete(delete_manufacturer),
        )
}

async fn create_manufacturer(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ManufacturerForm>,
) -> Result<(StatusCode, Json<ApiResponse<Manufacturer>>), AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let manufacturer = controller.create(&form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(manufacturer, "Manufacturer created")),
    ))
}

async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Manufacturer>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_manufacturer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Manufacturer>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(form): ApiJson<ManufacturerForm>,
) -> Result<Json<ApiResponse<Manufacturer>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let manufacturer = controller.update(id, &form).await?;
    Ok(Json(ApiResponse::success_with_message(manufacturer, "Manufacturer updated")))
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Manufacturer deleted")))
}
