//! Alumni domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::alumni::{AlumniDto, CreateAlumniDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Alumni {
    pub id: i32,
    pub full_name: String,
    pub graduation_year: i32,
    pub class_grade: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_organization: Option<String>,
    pub designation: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Alumni {
    pub fn into_dto(self) -> AlumniDto {
        AlumniDto {
            id: self.id,
            full_name: self.full_name,
            graduation_year: self.graduation_year,
            current_organization: self.current_organization,
            designation: self.designation,
        }
    }

    pub fn from_entity(entity: entity::alumni::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            graduation_year: entity.graduation_year,
            class_grade: entity.class_grade,
            email: entity.email,
            phone: entity.phone,
            current_organization: entity.current_organization,
            designation: entity.designation,
            joined_at: entity.joined_at,
        }
    }
}

/// Parameters for the self-service alumni registration form.
#[derive(Debug, Clone)]
pub struct CreateAlumniParam {
    pub full_name: String,
    pub graduation_year: i32,
    pub class_grade: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_organization: Option<String>,
    pub designation: Option<String>,
}

impl From<CreateAlumniDto> for CreateAlumniParam {
    fn from(dto: CreateAlumniDto) -> Self {
        Self {
            full_name: dto.full_name,
            graduation_year: dto.graduation_year,
            class_grade: dto.class_grade,
            email: dto.email,
            phone: dto.phone,
            current_organization: dto.current_organization,
            designation: dto.designation,
        }
    }
}
