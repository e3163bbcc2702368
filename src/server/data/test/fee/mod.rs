use crate::{
    model::fee::FeeStatus,
    server::{data::fee::FeeRepository, error::AppError, model::fee::CreateFeeParam},
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory::helpers::create_student_with_user};

mod create;
mod get_by_student_id;
mod mark_paid;

fn tuition(student_id: i32) -> CreateFeeParam {
    CreateFeeParam {
        student_id,
        amount: 1500.0,
        fee_type: "tuition".to_string(),
        due_date: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
    }
}
