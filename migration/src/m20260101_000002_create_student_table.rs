use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::UserId))
                    .col(string_uniq(Student::RollNumber))
                    .col(string(Student::ClassGrade))
                    .col(string(Student::Section))
                    .col(string(Student::Phone))
                    .col(text(Student::Address))
                    .col(string(Student::ParentName))
                    .col(string(Student::ParentPhone))
                    .col(date(Student::Dob))
                    .col(
                        timestamp_with_time_zone(Student::AdmissionDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Student::BusRoute))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_user_id")
                            .from(Student::Table, Student::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    UserId,
    RollNumber,
    ClassGrade,
    Section,
    Phone,
    Address,
    ParentName,
    ParentPhone,
    Dob,
    AdmissionDate,
    BusRoute,
}
