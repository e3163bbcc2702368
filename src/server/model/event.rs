//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{
        error::AppError,
        util::parse::{parse_date_time, DATE_TIME_FORMAT},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub organized_by: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            event_date: self.event_date.format(DATE_TIME_FORMAT).to_string(),
            location: self.location,
            category: self.category,
        }
    }

    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            event_date: entity.event_date,
            location: entity.location,
            category: entity.category,
            organized_by: entity.organized_by,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub organized_by: String,
}

impl TryFrom<CreateEventDto> for CreateEventParam {
    type Error = AppError;

    fn try_from(dto: CreateEventDto) -> Result<Self, Self::Error> {
        let event_date = parse_date_time("event_date", &dto.event_date)?;

        Ok(Self {
            title: dto.title,
            description: dto.description,
            event_date,
            location: dto.location,
            category: dto.category,
            organized_by: dto.organized_by,
        })
    }
}
