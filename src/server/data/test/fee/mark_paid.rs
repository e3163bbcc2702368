use super::*;

/// Tests paying a pending fee.
///
/// Expected: Ok(Some) with status paid and paid date set
#[tokio::test]
async fn marks_fee_paid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let repo = FeeRepository::new(db);
    let fee = repo.create(tuition(student.id)).await?;
    let paid_on = NaiveDate::from_ymd_opt(2026, 4, 12).unwrap();

    let paid = repo.mark_paid(fee.id, paid_on).await?.unwrap();

    assert_eq!(paid.status, FeeStatus::Paid);
    assert_eq!(paid.paid_date, Some(paid_on));

    let stored = repo.find_by_id(fee.id).await?.unwrap();
    assert_eq!(stored, paid);

    Ok(())
}

/// Tests that paying again re-stamps the paid date.
///
/// Expected: Ok(Some) with the later date
#[tokio::test]
async fn paying_again_overwrites_paid_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = create_student_with_user(db).await?;
    let repo = FeeRepository::new(db);
    let fee = repo.create(tuition(student.id)).await?;

    repo.mark_paid(fee.id, NaiveDate::from_ymd_opt(2026, 4, 12).unwrap())
        .await?;
    let repaid = repo
        .mark_paid(fee.id, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
        .await?
        .unwrap();

    assert_eq!(repaid.status, FeeStatus::Paid);
    assert_eq!(repaid.paid_date, NaiveDate::from_ymd_opt(2026, 5, 1));

    Ok(())
}

/// Tests paying a fee that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_fee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .with_table(entity::prelude::Fee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FeeRepository::new(db)
        .mark_paid(1, NaiveDate::from_ymd_opt(2026, 4, 12).unwrap())
        .await?;

    assert!(result.is_none());

    Ok(())
}
