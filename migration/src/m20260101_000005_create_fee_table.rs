use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fee::Table)
                    .if_not_exists()
                    .col(pk_auto(Fee::Id))
                    .col(integer(Fee::StudentId))
                    .col(double(Fee::Amount))
                    .col(string(Fee::FeeType))
                    .col(date(Fee::DueDate))
                    .col(date_null(Fee::PaidDate))
                    .col(string(Fee::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Fee::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_student_id")
                            .from(Fee::Table, Fee::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fee {
    Table,
    Id,
    StudentId,
    Amount,
    FeeType,
    DueDate,
    PaidDate,
    Status,
    CreatedAt,
}
