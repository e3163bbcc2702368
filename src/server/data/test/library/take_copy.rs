use super::*;

/// Tests taking a copy of a book with copies left.
///
/// Expected: Ok(true) and available decremented by exactly one
#[tokio::test]
async fn decrements_available_by_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = LibraryBookFactory::new(db).copies(3).build().await?;
    let repo = LibraryBookRepository::new(db);

    assert!(repo.take_copy(book.id).await?);

    let stored = repo.find_by_id(book.id).await?.unwrap();
    assert_eq!(stored.available, 2);
    assert_eq!(stored.quantity, 3);

    Ok(())
}

/// Tests taking a copy when none are left.
///
/// Expected: Ok(false) and available stays at zero
#[tokio::test]
async fn refuses_when_no_copies_left() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = LibraryBookFactory::new(db).available(0).build().await?;
    let repo = LibraryBookRepository::new(db);

    assert!(!repo.take_copy(book.id).await?);

    let stored = repo.find_by_id(book.id).await?.unwrap();
    assert_eq!(stored.available, 0);

    Ok(())
}

/// Tests that the last copy can only be taken once.
///
/// Expected: first call Ok(true), second Ok(false)
#[tokio::test]
async fn last_copy_is_taken_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_library_book(db).await?;
    let repo = LibraryBookRepository::new(db);

    assert!(repo.take_copy(book.id).await?);
    assert!(!repo.take_copy(book.id).await?);

    Ok(())
}

/// Tests taking a copy of a book that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_unknown_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!LibraryBookRepository::new(db).take_copy(12).await?);

    Ok(())
}
