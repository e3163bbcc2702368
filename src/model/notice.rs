use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateNoticeDto {
    pub title: String,
    pub content: String,
    pub category: String,
    pub posted_by: String,
    #[serde(default)]
    pub expires_at: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
}
