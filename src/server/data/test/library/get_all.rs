use super::*;

/// Tests listing the whole catalogue.
///
/// Expected: Ok with every book ordered by ID
#[tokio::test]
async fn lists_all_books_without_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fiction = factory::create_library_book(db).await?;
    let science = LibraryBookFactory::new(db)
        .category("Science")
        .build()
        .await?;

    let books = LibraryBookRepository::new(db).get_all(None).await?;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, fiction.id);
    assert_eq!(books[1].id, science.id);

    Ok(())
}

/// Tests filtering the catalogue by exact category.
///
/// Expected: Ok with only matching books
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_library_book(db).await?;
    let science = LibraryBookFactory::new(db)
        .category("Science")
        .title("A Brief History of Time")
        .build()
        .await?;

    let books = LibraryBookRepository::new(db)
        .get_all(Some("Science".to_string()))
        .await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, science.id);
    assert_eq!(books[0].title, "A Brief History of Time");

    let none = LibraryBookRepository::new(db)
        .get_all(Some("Poetry".to_string()))
        .await?;
    assert!(none.is_empty());

    Ok(())
}
