//! Notice domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::notice::{CreateNoticeDto, NoticeDto},
    server::{
        error::AppError,
        util::parse::{parse_date_time, DATE_TIME_FORMAT},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub posted_by: String,
    pub created_at: DateTime<Utc>,
    /// Informational only; expired notices are still listed.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notice {
    pub fn into_dto(self) -> NoticeDto {
        NoticeDto {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            created_at: self.created_at.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    pub fn from_entity(entity: entity::notice::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            category: entity.category,
            posted_by: entity.posted_by,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNoticeParam {
    pub title: String,
    pub content: String,
    pub category: String,
    pub posted_by: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<CreateNoticeDto> for CreateNoticeParam {
    type Error = AppError;

    fn try_from(dto: CreateNoticeDto) -> Result<Self, Self::Error> {
        let expires_at = dto
            .expires_at
            .as_deref()
            .map(|value| parse_date_time("expires_at", value))
            .transpose()?;

        Ok(Self {
            title: dto.title,
            content: dto.content,
            category: dto.category,
            posted_by: dto.posted_by,
            expires_at,
        })
    }
}
