//! Admission service for business logic.
//!
//! This module provides the `AdmissionService` for the admission intake workflow:
//! submitting applications, listing them for review, and approving them.

use sea_orm::DatabaseConnection;

use crate::{
    model::admission::AdmissionStatus,
    server::{
        data::admission::AdmissionRepository,
        error::AppError,
        model::admission::{Admission, CreateAdmissionParam},
    },
};

/// Service providing business logic for admission applications.
pub struct AdmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdmissionService<'a> {
    /// Creates a new AdmissionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdmissionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new application.
    ///
    /// # Arguments
    /// - `param` - Applicant details with a parsed date of birth
    ///
    /// # Returns
    /// - `Ok(Admission)` - Stored application with status `pending`
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn apply(&self, param: CreateAdmissionParam) -> Result<Admission, AppError> {
        let admission = AdmissionRepository::new(self.db).create(param).await?;

        tracing::debug!("Admission application {} submitted", admission.id);

        Ok(admission)
    }

    /// Lists every application ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Admission>, AppError> {
        AdmissionRepository::new(self.db).get_all().await
    }

    /// Approves an application.
    ///
    /// The status is overwritten unconditionally, so approving an already approved
    /// (or rejected) application succeeds. No student record is created.
    ///
    /// # Arguments
    /// - `id` - Application ID
    ///
    /// # Returns
    /// - `Ok(Admission)` - The approved application
    /// - `Err(AppError::NotFound)` - No application with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn approve(&self, id: i32) -> Result<Admission, AppError> {
        let admission = AdmissionRepository::new(self.db)
            .update_status(id, AdmissionStatus::Approved)
            .await?
            .ok_or_else(|| AppError::NotFound("Admission not found".to_string()))?;

        tracing::info!("Admission {} approved", admission.id);

        Ok(admission)
    }
}
