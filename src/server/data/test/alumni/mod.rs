use crate::server::{data::alumni::AlumniRepository, model::alumni::CreateAlumniParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_all;

fn graduate(full_name: &str, graduation_year: i32) -> CreateAlumniParam {
    CreateAlumniParam {
        full_name: full_name.to_string(),
        graduation_year,
        class_grade: "12".to_string(),
        email: None,
        phone: None,
        current_organization: None,
        designation: None,
    }
}
