use sea_orm::DatabaseConnection;

use crate::server::{
    data::alumni::AlumniRepository,
    error::AppError,
    model::alumni::{Alumni, CreateAlumniParam},
};

/// Service for the alumni directory.
pub struct AlumniService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlumniService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists alumni by most recent graduation year.
    pub async fn get_all(&self) -> Result<Vec<Alumni>, AppError> {
        Ok(AlumniRepository::new(self.db).get_all().await?)
    }

    pub async fn register(&self, param: CreateAlumniParam) -> Result<Alumni, AppError> {
        Ok(AlumniRepository::new(self.db).create(param).await?)
    }
}
