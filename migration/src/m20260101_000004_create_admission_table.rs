use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admission::Table)
                    .if_not_exists()
                    .col(pk_auto(Admission::Id))
                    .col(string(Admission::FullName))
                    .col(string(Admission::Email))
                    .col(string(Admission::Phone))
                    .col(string(Admission::ClassGrade))
                    .col(date(Admission::Dob))
                    .col(string(Admission::ParentName))
                    .col(string(Admission::ParentPhone))
                    .col(string(Admission::Status).default("pending"))
                    .col(text_null(Admission::Documents))
                    .col(
                        timestamp_with_time_zone(Admission::AppliedOn)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Admission {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    ClassGrade,
    Dob,
    ParentName,
    ParentPhone,
    Status,
    Documents,
    AppliedOn,
}
