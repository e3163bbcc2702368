use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// Repository providing read access to staff records.
pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Staff::find().count(self.db).await
    }
}
