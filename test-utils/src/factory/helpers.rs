//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Unique columns (username, roll number, bus number, ...) are suffixed with
/// this counter so factories never collide.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student together with the user account it belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let student = crate::factory::student::create_student(db, user.id).await?;

    Ok((user, student))
}

/// Creates a staff member together with the user account it belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, staff))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_staff_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::staff::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    let staff = crate::factory::staff::create_staff(db, user.id).await?;

    Ok((user, staff))
}
