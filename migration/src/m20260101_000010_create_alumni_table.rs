use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alumni::Table)
                    .if_not_exists()
                    .col(pk_auto(Alumni::Id))
                    .col(string(Alumni::FullName))
                    .col(integer(Alumni::GraduationYear))
                    .col(string(Alumni::ClassGrade))
                    .col(string_null(Alumni::Email))
                    .col(string_null(Alumni::Phone))
                    .col(string_null(Alumni::CurrentOrganization))
                    .col(string_null(Alumni::Designation))
                    .col(text_null(Alumni::Bio))
                    .col(string_null(Alumni::ProfilePhoto))
                    .col(
                        timestamp_with_time_zone(Alumni::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alumni::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alumni {
    Table,
    Id,
    FullName,
    GraduationYear,
    ClassGrade,
    Email,
    Phone,
    CurrentOrganization,
    Designation,
    Bio,
    ProfilePhoto,
    JoinedAt,
}
