use crate::server::{data::notice::NoticeRepository, model::notice::CreateNoticeParam};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;

mod create;
mod get_all;

fn notice(title: &str, category: &str) -> CreateNoticeParam {
    CreateNoticeParam {
        title: title.to_string(),
        content: format!("{} content", title),
        category: category.to_string(),
        posted_by: "Principal".to_string(),
        expires_at: None,
    }
}
