use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every error response outside the library circulation routes.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement returned by state-flipping routes (approve, pay, return, ...).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Acknowledgement carrying the id of the row that was just inserted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedDto {
    pub success: bool,
    pub id: i32,
}

impl CreatedDto {
    pub fn new(id: i32) -> Self {
        Self { success: true, id }
    }
}

/// Failure body used by the library circulation routes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FailureDto {
    pub success: bool,
    pub message: String,
}
