use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_student_table::Student,
    m20260101_000007_create_library_book_table::LibraryBook,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookIssue::Table)
                    .if_not_exists()
                    .col(pk_auto(BookIssue::Id))
                    .col(integer(BookIssue::StudentId))
                    .col(integer(BookIssue::BookId))
                    .col(timestamp_with_time_zone(BookIssue::IssueDate))
                    .col(timestamp_with_time_zone(BookIssue::DueDate))
                    .col(timestamp_with_time_zone_null(BookIssue::ReturnDate))
                    .col(string(BookIssue::Status).default("issued"))
                    .col(double(BookIssue::Fine).default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_issue_student_id")
                            .from(BookIssue::Table, BookIssue::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_issue_book_id")
                            .from(BookIssue::Table, BookIssue::BookId)
                            .to(LibraryBook::Table, LibraryBook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookIssue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookIssue {
    Table,
    Id,
    StudentId,
    BookId,
    IssueDate,
    DueDate,
    ReturnDate,
    Status,
    Fine,
}
