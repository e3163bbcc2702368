//! Fee domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::fee::{CreateFeeDto, FeeDto, FeeStatus},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_date, DATE_FORMAT},
    },
};

/// A billable obligation tied to a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Fee {
    pub id: i32,
    pub student_id: i32,
    pub amount: f64,
    pub fee_type: String,
    pub due_date: NaiveDate,
    /// Date of the most recent payment call, `None` while pending.
    pub paid_date: Option<NaiveDate>,
    pub status: FeeStatus,
    pub created_at: DateTime<Utc>,
}

impl Fee {
    /// Converts the fee domain model to a DTO for API responses.
    pub fn into_dto(self) -> FeeDto {
        FeeDto {
            id: self.id,
            student_id: self.student_id,
            amount: self.amount,
            fee_type: self.fee_type,
            due_date: self.due_date.format(DATE_FORMAT).to_string(),
            paid_date: self
                .paid_date
                .map(|date| date.format(DATE_FORMAT).to_string()),
            status: self.status,
        }
    }

    /// Converts an entity model to a fee domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Fee)` - The converted fee domain model
    /// - `Err(AppError::InternalErr(UnknownStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::fee::Model) -> Result<Self, AppError> {
        let status =
            FeeStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownStatus {
                kind: "fee",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            amount: entity.amount,
            fee_type: entity.fee_type,
            due_date: entity.due_date,
            paid_date: entity.paid_date,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a fee.
///
/// Amount sign and duplicates are not checked.
#[derive(Debug, Clone)]
pub struct CreateFeeParam {
    pub student_id: i32,
    pub amount: f64,
    pub fee_type: String,
    pub due_date: NaiveDate,
}

impl TryFrom<CreateFeeDto> for CreateFeeParam {
    type Error = AppError;

    fn try_from(dto: CreateFeeDto) -> Result<Self, Self::Error> {
        let due_date = parse_date("due_date", &dto.due_date)?;

        Ok(Self {
            student_id: dto.student_id,
            amount: dto.amount,
            fee_type: dto.fee_type,
            due_date,
        })
    }
}
