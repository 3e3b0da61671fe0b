use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use validator::ValidationErrors;

use crate::controllers::{CarController, CarModelController, CatalogController, ManufacturerController};
use crate::forms::{CarFilterForm, CarForm, CarModelForm, FormChoices, ManufacturerForm};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::pages;

pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add_manufacturer", get(add_manufacturer_page).post(add_manufacturer))
        .route("/add_model", get(add_model_page).post(add_model))
        .route("/add_car", get(add_car_page).post(add_car))
}

/// Failure on a page route, answered with an HTML error page.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        Self(rejection.into())
    }
}

impl From<QueryRejection> for PageError {
    fn from(rejection: QueryRejection) -> Self {
        Self(rejection.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        match &self.0 {
            AppError::Database(e) => tracing::error!("Page failed with database error: {}", e),
            other => tracing::warn!("Page failed: {}", other),
        }

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Html(pages::error(title, &self.0.public_message()))).into_response()
    }
}

/// Re-render a rejected submission with its errors, or fall back to an
/// error page for anything the form cannot show.
fn rejected<F>(error: AppError, render: F) -> Result<Response, PageError>
where
    F: FnOnce(Option<&ValidationErrors>, Option<&str>) -> String,
{
    let html = match error {
        AppError::Validation(errors) => render(Some(&errors), None),
        AppError::Referential(message) => render(None, Some(&message)),
        other => return Err(other.into()),
    };
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
}

async fn index(
    State(state): State<AppState>,
    filter: Result<Query<CarFilterForm>, QueryRejection>,
) -> Result<Response, PageError> {
    let Query(filter) = filter?;
    let controller = CatalogController::new(state.pool.clone());
    match controller.overview(&filter).await {
        Ok(overview) => Ok(Html(pages::index(&overview, None)).into_response()),
        Err(AppError::Validation(errors)) => {
            let overview = controller.overview(&CarFilterForm::default()).await?;
            Ok((
                StatusCode::BAD_REQUEST,
                Html(pages::index(&overview, Some(&errors))),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn add_manufacturer_page() -> Html<String> {
    Html(pages::add_manufacturer(&ManufacturerForm::default(), None, None))
}

async fn add_manufacturer(
    State(state): State<AppState>,
    form: Result<Form<ManufacturerForm>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(form) = form?;
    let controller = ManufacturerController::new(state.pool.clone());
    match controller.create(&form).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => rejected(e, |errors, message| {
            pages::add_manufacturer(&form, errors, message)
        }),
    }
}

async fn add_model_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let choices = FormChoices::load(&state.pool).await?;
    Ok(Html(pages::add_model(&CarModelForm::default(), &choices, None, None)))
}

async fn add_model(
    State(state): State<AppState>,
    form: Result<Form<CarModelForm>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(form) = form?;
    let choices = FormChoices::load(&state.pool).await?;
    let controller = CarModelController::new(state.pool.clone());
    match controller.create_with_choices(&form, &choices).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => rejected(e, |errors, message| {
            pages::add_model(&form, &choices, errors, message)
        }),
    }
}

async fn add_car_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let choices = FormChoices::load(&state.pool).await?;
    Ok(Html(pages::add_car(&CarForm::default(), &choices, None, None)))
}

async fn add_car(
    State(state): State<AppState>,
    form: Result<Form<CarForm>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(form) = form?;
    let choices = FormChoices::load(&state.pool).await?;
    let controller = CarController::new(state.pool.clone());
    match controller.create_with_choices(&form, &choices).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => rejected(e, |errors, message| {
            pages::add_car(&form, &choices, errors, message)
        }),
    }
}
