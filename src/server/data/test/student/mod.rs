use crate::server::data::student::StudentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers::create_student_with_user};

mod exists;
