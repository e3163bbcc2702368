//! Admission domain models and parameters.
//!
//! An admission is a prospective student's application. It carries a tri-state
//! status; the only transition the application performs is pending → approved.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::admission::{AdmissionDto, AdmissionStatus, CreateAdmissionDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_date, DATE_TIME_SECONDS_FORMAT},
    },
};

/// Admission application with applicant details and approval state.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_grade: String,
    pub dob: NaiveDate,
    pub parent_name: String,
    pub parent_phone: String,
    pub status: AdmissionStatus,
    pub documents: Option<String>,
    pub applied_on: DateTime<Utc>,
}

impl Admission {
    /// Converts the admission domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `AdmissionDto` - The converted admission DTO with `applied_on` formatted
    ///   as `YYYY-MM-DD HH:MM:SS`
    pub fn into_dto(self) -> AdmissionDto {
        AdmissionDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            class_grade: self.class_grade,
            status: self.status,
            applied_on: self.applied_on.format(DATE_TIME_SECONDS_FORMAT).to_string(),
        }
    }

    /// Converts an entity model to an admission domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Admission)` - The converted admission domain model
    /// - `Err(AppError::InternalErr(UnknownStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::admission::Model) -> Result<Self, AppError> {
        let status =
            AdmissionStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownStatus {
                kind: "admission",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            phone: entity.phone,
            class_grade: entity.class_grade,
            dob: entity.dob,
            parent_name: entity.parent_name,
            parent_phone: entity.parent_phone,
            status,
            documents: entity.documents,
            applied_on: entity.applied_on,
        })
    }
}

/// Parameters for submitting a new admission application.
#[derive(Debug, Clone)]
pub struct CreateAdmissionParam {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_grade: String,
    pub dob: NaiveDate,
    pub parent_name: String,
    pub parent_phone: String,
    pub documents: Option<String>,
}

impl TryFrom<CreateAdmissionDto> for CreateAdmissionParam {
    type Error = AppError;

    /// Parses the `dob` field; a malformed date rejects the whole application.
    fn try_from(dto: CreateAdmissionDto) -> Result<Self, Self::Error> {
        let dob = parse_date("dob", &dto.dob)?;

        Ok(Self {
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            class_grade: dto.class_grade,
            dob,
            parent_name: dto.parent_name,
            parent_phone: dto.parent_phone,
            documents: dto.documents,
        })
    }
}
