//! Staff factory for creating test staff entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members.
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    employee_id: String,
    designation: String,
    department: String,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - employee_id: `"EMP{id}"` where id is auto-incremented
    /// - designation: `"Teacher"`
    /// - department: `"Mathematics"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            employee_id: format!("EMP{}", id),
            designation: "Teacher".to_string(),
            department: "Mathematics".to_string(),
        }
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            employee_id: ActiveValue::Set(self.employee_id),
            designation: ActiveValue::Set(self.designation),
            department: ActiveValue::Set(self.department),
            phone: ActiveValue::Set("9811111111".to_string()),
            qualification: ActiveValue::Set("M.Sc.".to_string()),
            join_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with default values for the given user.
pub async fn create_staff(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db, user_id).build().await
}
