//! Library service for catalogue browsing and book circulation.
//!
//! Issuing and returning a book each touch two tables. Both run inside a single
//! transaction so a failure part-way through leaves copy counts and issue records
//! consistent. Every query inside the transaction goes through the transaction
//! handle rather than the pool.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        library::{BookIssueRepository, LibraryBookRepository},
        student::StudentRepository,
    },
    error::{library::LibraryError, AppError},
    model::library::{BookIssue, IssueBookParam, LibraryBook},
};

/// Service providing business logic for the school library.
pub struct LibraryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LibraryService<'a> {
    /// Creates a new LibraryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LibraryService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists books, optionally restricted to one category.
    ///
    /// # Arguments
    /// - `category` - Category to match exactly, or `None` for the whole catalogue
    pub async fn get_books(&self, category: Option<String>) -> Result<Vec<LibraryBook>, AppError> {
        Ok(LibraryBookRepository::new(self.db).get_all(category).await?)
    }

    /// Lends one copy of a book to a student.
    ///
    /// Takes a copy off the shelf with a conditional decrement and records the
    /// issue in the same transaction. When no copy can be taken nothing is written.
    ///
    /// The decrement is the first statement of the transaction so SQLite takes the
    /// write lock before any read. A read first would pin a snapshot that a
    /// concurrent commit invalidates, failing the later write with `SQLITE_BUSY`.
    ///
    /// # Arguments
    /// - `param` - Student and book IDs
    ///
    /// # Returns
    /// - `Ok(BookIssue)` - The new issue, due in fourteen days
    /// - `Err(AppError::NotFound)` - The student does not exist
    /// - `Err(AppError::LibraryErr(BookNotAvailable))` - The book does not exist or has no copies left
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn issue(&self, param: IssueBookParam) -> Result<BookIssue, AppError> {
        let txn = self.db.begin().await?;

        let taken = LibraryBookRepository::new(&txn)
            .take_copy(param.book_id)
            .await?;

        // Dropping the transaction rolls the decrement back
        if !StudentRepository::new(&txn).exists(param.student_id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        if !taken {
            return Err(LibraryError::BookNotAvailable.into());
        }

        let issue = BookIssueRepository::new(&txn)
            .create(param, Utc::now())
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Book {} issued to student {} (issue {})",
            issue.book_id,
            issue.student_id,
            issue.id
        );

        Ok(issue)
    }

    /// Takes back an issued book.
    ///
    /// Flips the issue to `returned` only if it is still outstanding, then puts
    /// the copy back on the shelf. A second return of the same issue is refused
    /// so the copy count cannot drift above what was lent out. As with `issue`,
    /// the conditional write runs before any read.
    ///
    /// # Arguments
    /// - `issue_id` - ID of the issue record
    ///
    /// # Returns
    /// - `Ok(())` - The book was returned
    /// - `Err(AppError::NotFound)` - No issue with that ID
    /// - `Err(AppError::LibraryErr(AlreadyReturned))` - The issue was already returned
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn return_book(&self, issue_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let issue_repo = BookIssueRepository::new(&txn);
        let returned = issue_repo.mark_returned(issue_id, Utc::now()).await?;

        let issue = issue_repo
            .find_by_id(issue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found".to_string()))?;

        if !returned {
            return Err(LibraryError::AlreadyReturned.into());
        }

        if !LibraryBookRepository::new(&txn)
            .return_copy(issue.book_id)
            .await?
        {
            tracing::warn!(
                "Issue {} returned but book {} no longer exists",
                issue.id,
                issue.book_id
            );
        }

        txn.commit().await?;

        tracing::info!("Issue {} returned (book {})", issue.id, issue.book_id);

        Ok(())
    }
}
