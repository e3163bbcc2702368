use super::*;

/// Tests returning an outstanding issue.
///
/// Expected: Ok(true) with status returned and return date stamped
#[tokio::test]
async fn marks_issue_returned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let book = factory::create_library_book(db).await?;
    let repo = BookIssueRepository::new(db);
    let issue = repo
        .create(
            IssueBookParam {
                student_id: student.id,
                book_id: book.id,
            },
            Utc::now(),
        )
        .await?;

    assert!(repo.mark_returned(issue.id, Utc::now()).await?);

    let stored = repo.find_by_id(issue.id).await?.unwrap();
    assert_eq!(stored.status, IssueStatus::Returned);
    assert!(stored.return_date.is_some());

    Ok(())
}

/// Tests that an issue can only be returned once.
///
/// Expected: second call Ok(false)
#[tokio::test]
async fn refuses_second_return() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let book = factory::create_library_book(db).await?;
    let repo = BookIssueRepository::new(db);
    let issue = repo
        .create(
            IssueBookParam {
                student_id: student.id,
                book_id: book.id,
            },
            Utc::now(),
        )
        .await?;

    assert!(repo.mark_returned(issue.id, Utc::now()).await?);
    assert!(!repo.mark_returned(issue.id, Utc::now()).await?);

    Ok(())
}

/// Tests returning an issue that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unknown_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!BookIssueRepository::new(db).mark_returned(5, Utc::now()).await?);

    Ok(())
}
