use super::*;

/// Tests counting only applications with the requested status.
///
/// Expected: Ok with pending and approved counted separately
#[tokio::test]
async fn counts_only_matching_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let approved = repo.create(application("Approved One")).await?;
    repo.create(application("Pending One")).await?;
    repo.create(application("Pending Two")).await?;
    repo.update_status(approved.id, AdmissionStatus::Approved)
        .await?;

    assert_eq!(repo.count_by_status(AdmissionStatus::Pending).await?, 2);
    assert_eq!(repo.count_by_status(AdmissionStatus::Approved).await?, 1);
    assert_eq!(repo.count_by_status(AdmissionStatus::Rejected).await?, 0);

    Ok(())
}
