use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Approval state of an admission application.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl AdmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAdmissionDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_grade: String,
    pub dob: String, // Format: "YYYY-MM-DD"
    pub parent_name: String,
    pub parent_phone: String,
    #[serde(default)]
    pub documents: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdmissionDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_grade: String,
    pub status: AdmissionStatus,
    pub applied_on: String, // Format: "YYYY-MM-DD HH:MM:SS"
}
