//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Students belong to a user, so the user ID must be provided.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    roll_number: String,
    class_grade: String,
    section: String,
    bus_route: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - roll_number: `"R{id}"` where id is auto-incremented
    /// - class_grade: `"10"`
    /// - section: `"A"`
    /// - bus_route: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user the student belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            roll_number: format!("R{}", id),
            class_grade: "10".to_string(),
            section: "A".to_string(),
            bus_route: None,
        }
    }

    pub fn roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    pub fn class_grade(mut self, class_grade: impl Into<String>) -> Self {
        self.class_grade = class_grade.into();
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn bus_route(mut self, bus_route: Option<String>) -> Self {
        self.bus_route = bus_route;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            roll_number: ActiveValue::Set(self.roll_number),
            class_grade: ActiveValue::Set(self.class_grade),
            section: ActiveValue::Set(self.section),
            phone: ActiveValue::Set("9800000000".to_string()),
            address: ActiveValue::Set("1 School Road".to_string()),
            parent_name: ActiveValue::Set("Parent".to_string()),
            parent_phone: ActiveValue::Set("9800000001".to_string()),
            dob: ActiveValue::Set(NaiveDate::from_ymd_opt(2012, 6, 15).unwrap_or_default()),
            admission_date: ActiveValue::Set(Utc::now()),
            bus_route: ActiveValue::Set(self.bus_route),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values for the given user.
pub async fn create_student(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, user_id).build().await
}
