use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LibraryBook::Table)
                    .if_not_exists()
                    .col(pk_auto(LibraryBook::Id))
                    .col(string(LibraryBook::Title))
                    .col(string(LibraryBook::Author))
                    .col(string_null(LibraryBook::Isbn).unique_key())
                    .col(string(LibraryBook::Category))
                    .col(integer(LibraryBook::Quantity).default(1))
                    .col(integer(LibraryBook::Available).default(1))
                    .col(integer_null(LibraryBook::PublicationYear))
                    .col(text_null(LibraryBook::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LibraryBook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LibraryBook {
    Table,
    Id,
    Title,
    Author,
    Isbn,
    Category,
    Quantity,
    Available,
    PublicationYear,
    Description,
}
