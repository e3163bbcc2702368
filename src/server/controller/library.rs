use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, FailureDto, SuccessDto},
        library::{IssueBookDto, LibraryBookDto},
    },
    server::{
        controller::CategoryParam, error::AppError, model::library::IssueBookParam,
        service::library::LibraryService, state::AppState,
    },
};

/// Tag for grouping library endpoints in OpenAPI documentation
pub static LIBRARY_TAG: &str = "library";

/// List library books, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/library/books",
    tag = LIBRARY_TAG,
    params(CategoryParam),
    responses(
        (status = 200, description = "Matching books", body = Vec<LibraryBookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Query(params): Query<CategoryParam>,
) -> Result<impl IntoResponse, AppError> {
    let books = LibraryService::new(&state.db)
        .get_books(params.into_filter())
        .await?;

    let dtos: Vec<LibraryBookDto> = books.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Issue a book to a student.
///
/// Takes one copy off the shelf and records the issue, due in fourteen days.
/// Both writes happen in one transaction; when no copy is left nothing is written.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student and book IDs
///
/// # Returns
/// - `201 Created` - Book issued, body carries the issue ID
/// - `400 Bad Request` - Book does not exist or has no copies left
/// - `404 Not Found` - Student does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/library/issue",
    tag = LIBRARY_TAG,
    request_body = IssueBookDto,
    responses(
        (status = 201, description = "Book issued", body = CreatedDto),
        (status = 400, description = "Book not available", body = FailureDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_book(
    State(state): State<AppState>,
    Json(payload): Json<IssueBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let issue = LibraryService::new(&state.db)
        .issue(IssueBookParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedDto::new(issue.id))))
}

/// Return an issued book.
///
/// # Returns
/// - `200 OK` - Book returned and copy put back on the shelf
/// - `400 Bad Request` - The issue was already returned
/// - `404 Not Found` - No issue with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/library/return/{issue_id}",
    tag = LIBRARY_TAG,
    params(
        ("issue_id" = i32, Path, description = "Book issue ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = SuccessDto),
        (status = 400, description = "Book already returned", body = FailureDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(issue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    LibraryService::new(&state.db).return_book(issue_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
