use super::*;

/// Tests existence checks for known and unknown students.
///
/// Expected: true for the created student, false otherwise
#[tokio::test]
async fn reports_existing_students_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let repo = StudentRepository::new(db);

    assert!(repo.exists(student.id).await?);
    assert!(!repo.exists(student.id + 1).await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
