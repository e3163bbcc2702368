//! Notice board data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::notice::{CreateNoticeParam, Notice};

/// Repository providing database operations for notices.
pub struct NoticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a notice stamped with the current time.
    pub async fn create(&self, param: CreateNoticeParam) -> Result<Notice, DbErr> {
        let entity = entity::notice::ActiveModel {
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            category: ActiveValue::Set(param.category),
            posted_by: ActiveValue::Set(param.posted_by),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(param.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notice::from_entity(entity))
    }

    /// Gets notices newest first, optionally restricted to one category.
    ///
    /// Expired notices are included.
    pub async fn get_all(&self, category: Option<String>) -> Result<Vec<Notice>, DbErr> {
        let notices = entity::prelude::Notice::find()
            .apply_if(category, |query, category| {
                query.filter(entity::notice::Column::Category.eq(category))
            })
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_desc(entity::notice::Column::Id)
            .all(self.db)
            .await?;

        Ok(notices.into_iter().map(Notice::from_entity).collect())
    }
}
