use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        alumni::{AlumniDto, CreateAlumniDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, model::alumni::CreateAlumniParam, service::alumni::AlumniService,
        state::AppState,
    },
};

/// Tag for grouping alumni endpoints in OpenAPI documentation
pub static ALUMNI_TAG: &str = "alumni";

/// List alumni, most recent graduation year first.
#[utoipa::path(
    get,
    path = "/api/alumni",
    tag = ALUMNI_TAG,
    responses(
        (status = 200, description = "All alumni", body = Vec<AlumniDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alumni(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let alumni = AlumniService::new(&state.db).get_all().await?;

    let dtos: Vec<AlumniDto> = alumni.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register as an alumnus.
#[utoipa::path(
    post,
    path = "/api/alumni",
    tag = ALUMNI_TAG,
    request_body = CreateAlumniDto,
    responses(
        (status = 201, description = "Alumni registered", body = AlumniDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_alumni(
    State(state): State<AppState>,
    Json(payload): Json<CreateAlumniDto>,
) -> Result<impl IntoResponse, AppError> {
    let alumni = AlumniService::new(&state.db)
        .register(CreateAlumniParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(alumni.into_dto())))
}
