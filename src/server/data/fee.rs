//! Fee data repository for database operations.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::fee::FeeStatus,
    server::{
        error::AppError,
        model::fee::{CreateFeeParam, Fee},
    },
};

/// Repository providing database operations for the fee ledger.
pub struct FeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending fee for a student.
    ///
    /// The caller is responsible for checking that the student exists.
    ///
    /// # Returns
    /// - `Ok(Fee)` - The created fee with status `pending` and no paid date
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFeeParam) -> Result<Fee, AppError> {
        let entity = entity::fee::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            amount: ActiveValue::Set(param.amount),
            fee_type: ActiveValue::Set(param.fee_type),
            due_date: ActiveValue::Set(param.due_date),
            paid_date: ActiveValue::Set(None),
            status: ActiveValue::Set(FeeStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Fee::from_entity(entity)
    }

    /// Gets all fees of a student ordered by ID.
    ///
    /// An unknown student simply has no fees.
    pub async fn get_by_student_id(&self, student_id: i32) -> Result<Vec<Fee>, AppError> {
        entity::prelude::Fee::find()
            .filter(entity::fee::Column::StudentId.eq(student_id))
            .order_by_asc(entity::fee::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Fee::from_entity)
            .collect()
    }

    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Fee>, AppError> {
        entity::prelude::Fee::find_by_id(id)
            .one(self.db)
            .await?
            .map(Fee::from_entity)
            .transpose()
    }

    /// Marks a fee as paid on the given date.
    ///
    /// Paying an already paid fee overwrites its paid date.
    ///
    /// # Arguments
    /// - `id` - Fee ID
    /// - `paid_date` - Date recorded as the payment date
    ///
    /// # Returns
    /// - `Ok(Some(Fee))` - The updated fee
    /// - `Ok(None)` - No fee with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn mark_paid(&self, id: i32, paid_date: NaiveDate) -> Result<Option<Fee>, AppError> {
        let Some(entity) = entity::prelude::Fee::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::fee::ActiveModel = entity.into();
        active.status = ActiveValue::Set(FeeStatus::Paid.as_str().to_string());
        active.paid_date = ActiveValue::Set(Some(paid_date));
        let updated = active.update(self.db).await?;

        Fee::from_entity(updated).map(Some)
    }
}
