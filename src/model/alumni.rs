use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAlumniDto {
    pub full_name: String,
    pub graduation_year: i32,
    pub class_grade: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub current_organization: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AlumniDto {
    pub id: i32,
    pub full_name: String,
    pub graduation_year: i32,
    pub current_organization: Option<String>,
    pub designation: Option<String>,
}
