use sea_orm::DatabaseConnection;

use crate::server::{
    data::notice::NoticeRepository,
    error::AppError,
    model::notice::{CreateNoticeParam, Notice},
};

/// Service for the notice board.
pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists notices newest first, optionally restricted to one category.
    ///
    /// Expiry dates are not consulted.
    pub async fn get_all(&self, category: Option<String>) -> Result<Vec<Notice>, AppError> {
        Ok(NoticeRepository::new(self.db).get_all(category).await?)
    }

    pub async fn post(&self, param: CreateNoticeParam) -> Result<Notice, AppError> {
        let notice = NoticeRepository::new(self.db).create(param).await?;

        tracing::debug!("Notice {} posted by {}", notice.id, notice.posted_by);

        Ok(notice)
    }
}
