use crate::server::{data::event::EventRepository, model::event::CreateEventParam};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_all;

fn event(title: &str, category: &str, day: u32) -> CreateEventParam {
    CreateEventParam {
        title: title.to_string(),
        description: format!("{} description", title),
        event_date: Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap(),
        location: "Main Hall".to_string(),
        category: category.to_string(),
        organized_by: "Student Council".to_string(),
    }
}
