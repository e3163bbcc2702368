use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::FailureDto;

#[derive(Error, Debug)]
pub enum LibraryError {
    /// The book does not exist or every copy is already issued.
    #[error("Book not available")]
    BookNotAvailable,

    /// The issue record was already returned; returning it again would
    /// over-count the book's available copies.
    #[error("Book already returned")]
    AlreadyReturned,
}

/// Converts library errors into `{"success": false, "message": ...}` responses.
///
/// # Returns
/// - 400 Bad Request - For every variant
impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(FailureDto {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
