use super::*;

/// Tests putting a copy back on the shelf.
///
/// Expected: Ok(true) and available incremented by one
#[tokio::test]
async fn increments_available_by_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = LibraryBookFactory::new(db)
        .copies(2)
        .available(0)
        .build()
        .await?;
    let repo = LibraryBookRepository::new(db);

    assert!(repo.return_copy(book.id).await?);

    let stored = repo.find_by_id(book.id).await?.unwrap();
    assert_eq!(stored.available, 1);

    Ok(())
}

/// Tests returning a copy of a book that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unknown_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!LibraryBookRepository::new(db).return_copy(3).await?);

    Ok(())
}
