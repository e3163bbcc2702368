//! Admission data repository for database operations.
//!
//! This module provides the `AdmissionRepository` for storing applications and
//! flipping their status, with conversion between entity models and domain models
//! at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::admission::AdmissionStatus,
    server::{
        error::AppError,
        model::admission::{Admission, CreateAdmissionParam},
    },
};

/// Repository providing database operations for admission applications.
pub struct AdmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdmissionRepository<'a> {
    /// Creates a new AdmissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdmissionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new application with status `pending`.
    ///
    /// # Arguments
    /// - `param` - Applicant details with the date of birth already parsed
    ///
    /// # Returns
    /// - `Ok(Admission)` - The stored application
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAdmissionParam) -> Result<Admission, AppError> {
        let entity = entity::admission::ActiveModel {
            full_name: ActiveValue::Set(param.full_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            class_grade: ActiveValue::Set(param.class_grade),
            dob: ActiveValue::Set(param.dob),
            parent_name: ActiveValue::Set(param.parent_name),
            parent_phone: ActiveValue::Set(param.parent_phone),
            status: ActiveValue::Set(AdmissionStatus::Pending.as_str().to_string()),
            documents: ActiveValue::Set(param.documents),
            applied_on: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Admission::from_entity(entity)
    }

    /// Gets every application ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Admission>, AppError> {
        entity::prelude::Admission::find()
            .order_by_asc(entity::admission::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Admission::from_entity)
            .collect()
    }

    /// Overwrites the status of an application regardless of its current value.
    ///
    /// # Arguments
    /// - `id` - Application ID
    /// - `status` - New status
    ///
    /// # Returns
    /// - `Ok(Some(Admission))` - The updated application
    /// - `Ok(None)` - No application with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: AdmissionStatus,
    ) -> Result<Option<Admission>, AppError> {
        let Some(entity) = entity::prelude::Admission::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::admission::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        let updated = active.update(self.db).await?;

        Admission::from_entity(updated).map(Some)
    }

    /// Counts applications currently holding the given status.
    pub async fn count_by_status(&self, status: AdmissionStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Admission::find()
            .filter(entity::admission::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
