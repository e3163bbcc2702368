use super::*;

/// Tests submitting a new application.
///
/// Verifies that the repository stores every field and starts the
/// application as pending.
///
/// Expected: Ok with pending admission stored
#[tokio::test]
async fn creates_pending_admission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let admission = repo.create(application("Asha Rai")).await?;

    assert!(admission.id > 0);
    assert_eq!(admission.full_name, "Asha Rai");
    assert_eq!(admission.status, AdmissionStatus::Pending);
    assert_eq!(admission.dob, NaiveDate::from_ymd_opt(2015, 4, 2).unwrap());

    let stored = entity::prelude::Admission::find_by_id(admission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

/// Tests that optional documents are persisted.
///
/// Expected: Ok with documents stored
#[tokio::test]
async fn stores_documents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let mut param = application("Bikash Thapa");
    param.documents = Some("birth-certificate.pdf".to_string());

    let admission = repo.create(param).await?;

    assert_eq!(admission.documents.as_deref(), Some("birth-certificate.pdf"));

    Ok(())
}
