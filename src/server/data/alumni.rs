//! Alumni data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::alumni::{Alumni, CreateAlumniParam};

pub struct AlumniRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlumniRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a graduate. Bio and profile photo are left empty.
    pub async fn create(&self, param: CreateAlumniParam) -> Result<Alumni, DbErr> {
        let entity = entity::alumni::ActiveModel {
            full_name: ActiveValue::Set(param.full_name),
            graduation_year: ActiveValue::Set(param.graduation_year),
            class_grade: ActiveValue::Set(param.class_grade),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            current_organization: ActiveValue::Set(param.current_organization),
            designation: ActiveValue::Set(param.designation),
            bio: ActiveValue::Set(None),
            profile_photo: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Alumni::from_entity(entity))
    }

    /// Gets alumni with the most recent graduation year first, ties by descending ID.
    pub async fn get_all(&self) -> Result<Vec<Alumni>, DbErr> {
        let alumni = entity::prelude::Alumni::find()
            .order_by_desc(entity::alumni::Column::GraduationYear)
            .order_by_desc(entity::alumni::Column::Id)
            .all(self.db)
            .await?;

        Ok(alumni.into_iter().map(Alumni::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Alumni::find().count(self.db).await
    }
}
