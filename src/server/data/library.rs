//! Library data repositories for database operations.
//!
//! This module provides `LibraryBookRepository` for the catalogue and its copy counts,
//! and `BookIssueRepository` for circulation records. Both are generic over the
//! connection so that issuing and returning a book can run inside one transaction.
//!
//! Copy counts are only ever changed through single conditional `UPDATE` statements,
//! so two concurrent issues of the last copy cannot both succeed.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait,
};

use crate::{
    model::library::IssueStatus,
    server::{
        error::AppError,
        model::library::{BookIssue, IssueBookParam, LibraryBook, LOAN_PERIOD_DAYS},
    },
};

/// Repository providing database operations for the book catalogue.
pub struct LibraryBookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LibraryBookRepository<'a, C> {
    /// Creates a new LibraryBookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets books ordered by ID, optionally restricted to one category.
    ///
    /// # Arguments
    /// - `category` - Exact category to match, or `None` for every book
    ///
    /// # Returns
    /// - `Ok(Vec<LibraryBook>)` - Matching books
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, category: Option<String>) -> Result<Vec<LibraryBook>, DbErr> {
        let books = entity::prelude::LibraryBook::find()
            .apply_if(category, |query, category| {
                query.filter(entity::library_book::Column::Category.eq(category))
            })
            .order_by_asc(entity::library_book::Column::Id)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(LibraryBook::from_entity).collect())
    }

    /// Finds a book by ID.
    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LibraryBook>, DbErr> {
        let book = entity::prelude::LibraryBook::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(book.map(LibraryBook::from_entity))
    }

    /// Takes one copy off the shelf if any is left.
    ///
    /// Runs `available = available - 1` guarded by `available > 0` as a single
    /// statement.
    ///
    /// # Returns
    /// - `Ok(true)` - A copy was taken
    /// - `Ok(false)` - The book does not exist or has no copies left
    /// - `Err(DbErr)` - Database error during update
    pub async fn take_copy(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LibraryBook::update_many()
            .col_expr(
                entity::library_book::Column::Available,
                Expr::col(entity::library_book::Column::Available).sub(1),
            )
            .filter(entity::library_book::Column::Id.eq(id))
            .filter(entity::library_book::Column::Available.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Puts one copy back on the shelf.
    ///
    /// # Returns
    /// - `Ok(true)` - The copy count was incremented
    /// - `Ok(false)` - The book no longer exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn return_copy(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LibraryBook::update_many()
            .col_expr(
                entity::library_book::Column::Available,
                Expr::col(entity::library_book::Column::Available).add(1),
            )
            .filter(entity::library_book::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

/// Repository providing database operations for book issue records.
pub struct BookIssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookIssueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a book lent to a student.
    ///
    /// The issue starts as `issued`, is due `LOAN_PERIOD_DAYS` after `issued_at`
    /// and carries no fine. The copy must already have been taken with
    /// `LibraryBookRepository::take_copy`.
    ///
    /// # Arguments
    /// - `param` - Student and book IDs
    /// - `issued_at` - Time the book left the shelf
    ///
    /// # Returns
    /// - `Ok(BookIssue)` - The created issue record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: IssueBookParam,
        issued_at: DateTime<Utc>,
    ) -> Result<BookIssue, AppError> {
        let entity = entity::book_issue::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            book_id: ActiveValue::Set(param.book_id),
            issue_date: ActiveValue::Set(issued_at),
            due_date: ActiveValue::Set(issued_at + Duration::days(LOAN_PERIOD_DAYS)),
            return_date: ActiveValue::Set(None),
            status: ActiveValue::Set(IssueStatus::Issued.as_str().to_string()),
            fine: ActiveValue::Set(0.0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BookIssue::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BookIssue>, AppError> {
        entity::prelude::BookIssue::find_by_id(id)
            .one(self.db)
            .await?
            .map(BookIssue::from_entity)
            .transpose()
    }

    /// Flips an issue from `issued` to `returned`, stamping the return date.
    ///
    /// # Returns
    /// - `Ok(true)` - The issue was outstanding and is now returned
    /// - `Ok(false)` - The issue does not exist or was already returned
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_returned(&self, id: i32, returned_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::BookIssue::update_many()
            .col_expr(
                entity::book_issue::Column::Status,
                Expr::value(IssueStatus::Returned.as_str()),
            )
            .col_expr(
                entity::book_issue::Column::ReturnDate,
                Expr::value(Some(returned_at)),
            )
            .filter(entity::book_issue::Column::Id.eq(id))
            .filter(entity::book_issue::Column::Status.eq(IssueStatus::Issued.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
