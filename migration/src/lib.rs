pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_student_table;
mod m20260101_000003_create_staff_table;
mod m20260101_000004_create_admission_table;
mod m20260101_000005_create_fee_table;
mod m20260101_000006_create_bus_route_table;
mod m20260101_000007_create_library_book_table;
mod m20260101_000008_create_book_issue_table;
mod m20260101_000009_create_event_table;
mod m20260101_000010_create_alumni_table;
mod m20260101_000011_create_notice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_student_table::Migration),
            Box::new(m20260101_000003_create_staff_table::Migration),
            Box::new(m20260101_000004_create_admission_table::Migration),
            Box::new(m20260101_000005_create_fee_table::Migration),
            Box::new(m20260101_000006_create_bus_route_table::Migration),
            Box::new(m20260101_000007_create_library_book_table::Migration),
            Box::new(m20260101_000008_create_book_issue_table::Migration),
            Box::new(m20260101_000009_create_event_table::Migration),
            Box::new(m20260101_000010_create_alumni_table::Migration),
            Box::new(m20260101_000011_create_notice_table::Migration),
        ]
    }
}
