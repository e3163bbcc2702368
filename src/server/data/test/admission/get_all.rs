use super::*;

/// Tests listing applications in insertion order.
///
/// Expected: Ok with applications ordered by ID
#[tokio::test]
async fn lists_admissions_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let first = repo.create(application("First Applicant")).await?;
    let second = repo.create(application("Second Applicant")).await?;

    let admissions = repo.get_all().await?;

    assert_eq!(admissions.len(), 2);
    assert_eq!(admissions[0].id, first.id);
    assert_eq!(admissions[1].id, second.id);

    Ok(())
}

/// Tests listing when nothing was submitted.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_admissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admissions = AdmissionRepository::new(db).get_all().await?;

    assert!(admissions.is_empty());

    Ok(())
}

/// Tests that a status the application does not know about surfaces as an
/// internal error instead of being silently mapped.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn rejects_unknown_stored_status() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_table(Admission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmissionRepository::new(db);
    let admission = repo.create(application("Odd Status")).await?;

    entity::admission::ActiveModel {
        id: ActiveValue::Unchanged(admission.id),
        status: ActiveValue::Set("waitlisted".to_string()),
        ..Default::default()
    }
    .update(db)
    .await?;

    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
