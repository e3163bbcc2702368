//! NSKK School Test Utils
//!
//! Shared testing utilities for the school application's repository, service and
//! HTTP tests. Every test gets its own in-memory SQLite database containing only
//! the tables it asks for.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for choosing the tables a test needs
//! - **TestContext**: The built environment holding the database connection and a session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Helpers inserting users, students, staff, bus routes and books
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::*;
//!
//! #[tokio::test]
//! async fn lists_routes() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_table(BusRoute).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_bus_route(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
