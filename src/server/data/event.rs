//! Event data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::event::{CreateEventParam, Event};

/// Repository providing database operations for school events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event stamped with the current time as its creation time.
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            event_date: ActiveValue::Set(param.event_date),
            location: ActiveValue::Set(param.location),
            category: ActiveValue::Set(param.category),
            organized_by: ActiveValue::Set(param.organized_by),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Gets events with the latest event date first.
    ///
    /// Events on the same date are ordered by descending ID.
    ///
    /// # Arguments
    /// - `category` - Exact category to match, or `None` for every event
    pub async fn get_all(&self, category: Option<String>) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .apply_if(category, |query, category| {
                query.filter(entity::event::Column::Category.eq(category))
            })
            .order_by_desc(entity::event::Column::EventDate)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        Ok(events.into_iter().map(Event::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Event::find().count(self.db).await
    }
}
