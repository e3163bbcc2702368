use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test touches, then call `build()` to get a
/// `TestContext` backed by a fresh in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Student, Fee};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Student)
///     .with_table(Fee)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and student tables.
    ///
    /// Most fee and library tests need a student to reference, and a student
    /// needs a user.
    pub fn with_student_tables(self) -> Self {
        self.with_table(User).with_table(Student)
    }

    /// Adds all tables required for library circulation.
    ///
    /// Adds User, Student, LibraryBook and BookIssue in dependency order.
    pub fn with_library_tables(self) -> Self {
        self.with_student_tables()
            .with_table(LibraryBook)
            .with_table(BookIssue)
    }

    /// Adds every table of the school schema in dependency order.
    ///
    /// Used by HTTP tests that drive the whole router.
    pub fn with_school_tables(self) -> Self {
        self.with_table(User)
            .with_table(Student)
            .with_table(Staff)
            .with_table(Admission)
            .with_table(Fee)
            .with_table(BusRoute)
            .with_table(LibraryBook)
            .with_table(BookIssue)
            .with_table(Event)
            .with_table(Alumni)
            .with_table(Notice)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
