//! Student data repository.
//!
//! Students are never created through the application's routes; other
//! operations only need to know whether one exists and how many there are.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

/// Repository providing read access to student records.
///
/// Generic over the connection so existence checks can run inside a
/// transaction.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a student with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let student = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(student.is_some())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }
}
