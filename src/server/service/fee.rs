//! Fee service for the per-student fee ledger.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{fee::FeeRepository, student::StudentRepository},
    error::AppError,
    model::fee::{CreateFeeParam, Fee},
};

pub struct FeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the fees of a student. An unknown student yields an empty list.
    pub async fn list_for_student(&self, student_id: i32) -> Result<Vec<Fee>, AppError> {
        FeeRepository::new(self.db)
            .get_by_student_id(student_id)
            .await
    }

    /// Creates a pending fee for an existing student.
    ///
    /// # Returns
    /// - `Ok(Fee)` - The created fee
    /// - `Err(AppError::NotFound)` - The referenced student does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFeeParam) -> Result<Fee, AppError> {
        if !StudentRepository::new(self.db)
            .exists(param.student_id)
            .await?
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        FeeRepository::new(self.db).create(param).await
    }

    /// Marks a fee as paid today (UTC).
    ///
    /// Repeat calls succeed and move the paid date to the latest call.
    ///
    /// # Returns
    /// - `Ok(Fee)` - The paid fee
    /// - `Err(AppError::NotFound)` - No fee with that ID
    pub async fn pay(&self, id: i32) -> Result<Fee, AppError> {
        let today = Utc::now().date_naive();

        let fee = FeeRepository::new(self.db)
            .mark_paid(id, today)
            .await?
            .ok_or_else(|| AppError::NotFound("Fee not found".to_string()))?;

        tracing::info!("Fee {} of student {} paid on {}", fee.id, fee.student_id, today);

        Ok(fee)
    }
}
