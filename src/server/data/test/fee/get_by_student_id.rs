use super::*;

/// Tests listing only the fees of the requested student.
///
/// Expected: Ok with the student's fees only
#[tokio::test]
async fn lists_fees_of_one_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let (_, other) = create_student_with_user(db).await?;

    let repo = FeeRepository::new(db);
    repo.create(tuition(student.id)).await?;
    let mut transport = tuition(student.id);
    transport.fee_type = "transport".to_string();
    repo.create(transport).await?;
    repo.create(tuition(other.id)).await?;

    let fees = repo.get_by_student_id(student.id).await?;

    assert_eq!(fees.len(), 2);
    assert!(fees.iter().all(|fee| fee.student_id == student.id));
    assert_eq!(fees[0].fee_type, "tuition");
    assert_eq!(fees[1].fee_type, "transport");

    Ok(())
}

/// Tests listing fees of a student that does not exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fees = FeeRepository::new(db).get_by_student_id(404).await?;

    assert!(fees.is_empty());

    Ok(())
}
