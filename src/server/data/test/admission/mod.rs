use crate::{
    model::admission::AdmissionStatus,
    server::{
        data::admission::AdmissionRepository, error::AppError,
        model::admission::CreateAdmissionParam,
    },
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;

mod count_by_status;
mod create;
mod get_all;
mod update_status;

fn application(full_name: &str) -> CreateAdmissionParam {
    CreateAdmissionParam {
        full_name: full_name.to_string(),
        email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
        phone: "9800000000".to_string(),
        class_grade: "5".to_string(),
        dob: NaiveDate::from_ymd_opt(2015, 4, 2).unwrap(),
        parent_name: "Parent".to_string(),
        parent_phone: "9800000001".to_string(),
        documents: None,
    }
}
