use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub event_date: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub location: String,
    pub category: String,
    pub organized_by: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub location: String,
    pub category: String,
}
