//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories only cover records the application never
//! creates through its own routes (users, students, staff, bus routes, books); records
//! with a create operation are inserted through their repositories instead.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let route = factory::create_bus_route(&db).await?;
//!
//!     // Create a student together with the user it belongs to
//!     let (user, student) = factory::helpers::create_student_with_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::library_book::LibraryBookFactory::new(&db)
//!     .category("Science")
//!     .copies(3)
//!     .build()
//!     .await?;
//! ```

pub mod bus_route;
pub mod helpers;
pub mod library_book;
pub mod staff;
pub mod student;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use bus_route::create_bus_route;
pub use library_book::create_library_book;
pub use staff::create_staff;
pub use student::create_student;
pub use user::create_user;
