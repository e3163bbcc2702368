use super::*;

/// Tests approving a pending application.
///
/// Expected: Ok(Some) with status approved
#[tokio::test]
async fn approves_pending_admission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let admission = repo.create(application("Chandra Gurung")).await?;

    let updated = repo
        .update_status(admission.id, AdmissionStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(updated.status, AdmissionStatus::Approved);
    assert_eq!(updated.full_name, admission.full_name);

    Ok(())
}

/// Tests that approving twice leaves the application approved.
///
/// Expected: Ok(Some) both times with the same status
#[tokio::test]
async fn approving_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let admission = repo.create(application("Dipa Shah")).await?;

    let first = repo
        .update_status(admission.id, AdmissionStatus::Approved)
        .await?;
    let second = repo
        .update_status(admission.id, AdmissionStatus::Approved)
        .await?;

    assert_eq!(first, second);
    assert_eq!(second.unwrap().status, AdmissionStatus::Approved);

    Ok(())
}

/// Tests updating an application that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_admission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdmissionRepository::new(db)
        .update_status(999, AdmissionStatus::Approved)
        .await?;

    assert!(result.is_none());

    Ok(())
}
