use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParam, Event},
};

/// Service for the school event calendar.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists events latest first, optionally restricted to one category.
    pub async fn get_all(&self, category: Option<String>) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all(category).await?)
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db).create(param).await?;

        tracing::debug!("Event {} '{}' created", event.id, event.title);

        Ok(event)
    }
}
