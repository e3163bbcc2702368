//! Library domain models and parameters.
//!
//! Covers both the book catalogue and the issue records that track
//! circulation of individual copies.

use chrono::{DateTime, Utc};

use crate::{
    model::library::{IssueBookDto, IssueStatus, LibraryBookDto},
    server::error::{internal::InternalError, AppError},
};

/// Days a copy may be kept before it is due back.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// A catalogue entry with its copy counts.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub category: String,
    pub quantity: i32,
    /// Copies currently on the shelf. Never negative.
    pub available: i32,
    pub publication_year: Option<i32>,
    pub description: Option<String>,
}

impl LibraryBook {
    pub fn into_dto(self) -> LibraryBookDto {
        LibraryBookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            category: self.category,
            available: self.available,
        }
    }

    pub fn from_entity(entity: entity::library_book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            isbn: entity.isbn,
            category: entity.category,
            quantity: entity.quantity,
            available: entity.available,
            publication_year: entity.publication_year,
            description: entity.description,
        }
    }
}

/// One copy of a book lent to a student.
#[derive(Debug, Clone, PartialEq)]
pub struct BookIssue {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: IssueStatus,
    /// Stored at zero; overdue fines are not calculated.
    pub fine: f64,
}

impl BookIssue {
    /// Converts an entity model to a book issue domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(BookIssue)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::book_issue::Model) -> Result<Self, AppError> {
        let status =
            IssueStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownStatus {
                kind: "book issue",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            book_id: entity.book_id,
            issue_date: entity.issue_date,
            due_date: entity.due_date,
            return_date: entity.return_date,
            status,
            fine: entity.fine,
        })
    }
}

/// Parameters for lending a book to a student.
#[derive(Debug, Clone)]
pub struct IssueBookParam {
    pub student_id: i32,
    pub book_id: i32,
}

impl From<IssueBookDto> for IssueBookParam {
    fn from(dto: IssueBookDto) -> Self {
        Self {
            student_id: dto.student_id,
            book_id: dto.book_id,
        }
    }
}
