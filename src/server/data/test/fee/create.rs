use super::*;

/// Tests creating a fee for an existing student.
///
/// Expected: Ok with pending fee and no paid date
#[tokio::test]
async fn creates_pending_fee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;

    let fee = FeeRepository::new(db).create(tuition(student.id)).await?;

    assert!(fee.id > 0);
    assert_eq!(fee.student_id, student.id);
    assert_eq!(fee.amount, 1500.0);
    assert_eq!(fee.status, FeeStatus::Pending);
    assert!(fee.paid_date.is_none());

    Ok(())
}

/// Tests that negative amounts are stored as given.
///
/// Expected: Ok with negative amount
#[tokio::test]
async fn stores_negative_amount_unchecked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let mut param = tuition(student.id);
    param.amount = -250.0;

    let fee = FeeRepository::new(db).create(param).await?;

    assert_eq!(fee.amount, -250.0);

    Ok(())
}
