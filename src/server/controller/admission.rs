use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admission::{AdmissionDto, CreateAdmissionDto},
        api::{CreatedDto, ErrorDto, SuccessDto},
    },
    server::{
        error::AppError, model::admission::CreateAdmissionParam,
        service::admission::AdmissionService, state::AppState,
    },
};

/// Tag for grouping admission endpoints in OpenAPI documentation
pub static ADMISSION_TAG: &str = "admission";

/// Submit an admission application.
///
/// Stores the application with status `pending`. The date of birth must be a
/// `YYYY-MM-DD` date; a malformed date rejects the whole request and stores nothing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Applicant details
///
/// # Returns
/// - `201 Created` - Application stored, body carries its ID
/// - `400 Bad Request` - Malformed date of birth
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admission/apply",
    tag = ADMISSION_TAG,
    request_body = CreateAdmissionDto,
    responses(
        (status = 201, description = "Application submitted", body = CreatedDto),
        (status = 400, description = "Malformed date of birth", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_admission(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAdmissionParam::try_from(payload)?;
    let admission = AdmissionService::new(&state.db).apply(param).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(admission.id))))
}

/// List all admission applications ordered by ID.
#[utoipa::path(
    get,
    path = "/api/admission/applications",
    tag = ADMISSION_TAG,
    responses(
        (status = 200, description = "All applications", body = Vec<AdmissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let admissions = AdmissionService::new(&state.db).get_all().await?;

    let dtos: Vec<AdmissionDto> = admissions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approve an admission application.
///
/// Sets the status to `approved` whatever it was before; calling it again
/// succeeds with the same result. No student record is created.
///
/// # Returns
/// - `200 OK` - Application approved
/// - `404 Not Found` - No application with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admission/{id}/approve",
    tag = ADMISSION_TAG,
    params(
        ("id" = i32, Path, description = "Admission application ID")
    ),
    responses(
        (status = 200, description = "Application approved", body = SuccessDto),
        (status = 404, description = "Admission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_admission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdmissionService::new(&state.db).approve(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
