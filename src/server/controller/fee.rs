use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        fee::{CreateFeeDto, FeeDto},
    },
    server::{
        error::AppError, model::fee::CreateFeeParam, service::fee::FeeService, state::AppState,
    },
};

/// Tag for grouping fee endpoints in OpenAPI documentation
pub static FEE_TAG: &str = "fee";

/// List the fees of a student.
///
/// An unknown student yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/fees/{id}",
    tag = FEE_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Fees of the student", body = Vec<FeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_fees(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fees = FeeService::new(&state.db)
        .list_for_student(student_id)
        .await?;

    let dtos: Vec<FeeDto> = fees.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a fee for a student.
///
/// Amounts are stored as given; neither the sign nor duplicates are checked.
///
/// # Returns
/// - `201 Created` - The created fee
/// - `400 Bad Request` - Malformed due date
/// - `404 Not Found` - Student does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/fees",
    tag = FEE_TAG,
    request_body = CreateFeeDto,
    responses(
        (status = 201, description = "Fee created", body = FeeDto),
        (status = 400, description = "Malformed due date", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fee(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFeeParam::try_from(payload)?;
    let fee = FeeService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(fee.into_dto())))
}

/// Mark a fee as paid today.
///
/// Paying an already paid fee succeeds and moves its paid date to today.
#[utoipa::path(
    put,
    path = "/api/fees/{id}/pay",
    tag = FEE_TAG,
    params(
        ("id" = i32, Path, description = "Fee ID")
    ),
    responses(
        (status = 200, description = "Fee paid", body = SuccessDto),
        (status = 404, description = "Fee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_fee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FeeService::new(&state.db).pay(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
