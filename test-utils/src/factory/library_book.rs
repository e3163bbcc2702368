//! Library book factory for creating test catalogue entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test library books.
pub struct LibraryBookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    category: String,
    quantity: i32,
    available: i32,
}

impl<'a> LibraryBookFactory<'a> {
    /// Creates a new LibraryBookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    /// - category: `"Fiction"`
    /// - quantity / available: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            category: "Fiction".to_string(),
            quantity: 1,
            available: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets both the quantity owned and the copies on the shelf.
    pub fn copies(mut self, copies: i32) -> Self {
        self.quantity = copies;
        self.available = copies;
        self
    }

    /// Sets the copies on the shelf without changing the quantity owned.
    pub fn available(mut self, available: i32) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the library book entity into the database.
    pub async fn build(self) -> Result<entity::library_book::Model, DbErr> {
        entity::library_book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            isbn: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            quantity: ActiveValue::Set(self.quantity),
            available: ActiveValue::Set(self.available),
            publication_year: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single-copy library book with default values.
pub async fn create_library_book(
    db: &DatabaseConnection,
) -> Result<entity::library_book::Model, DbErr> {
    LibraryBookFactory::new(db).build().await
}
