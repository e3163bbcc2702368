use super::*;

/// Tests recording a new issue.
///
/// Verifies the issue starts as issued, is due fourteen days later and
/// carries no fine.
///
/// Expected: Ok with issued record
#[tokio::test]
async fn creates_issue_due_in_fourteen_days() -> Result<(), AppError> {
    let test = TestBuilder::new().with_library_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let book = factory::create_library_book(db).await?;
    let issued_at = Utc::now();

    let issue = BookIssueRepository::new(db)
        .create(
            IssueBookParam {
                student_id: student.id,
                book_id: book.id,
            },
            issued_at,
        )
        .await?;

    assert!(issue.id > 0);
    assert_eq!(issue.student_id, student.id);
    assert_eq!(issue.book_id, book.id);
    assert_eq!(issue.status, IssueStatus::Issued);
    assert_eq!(issue.due_date - issue.issue_date, Duration::days(14));
    assert!(issue.return_date.is_none());
    assert_eq!(issue.fine, 0.0);

    Ok(())
}
