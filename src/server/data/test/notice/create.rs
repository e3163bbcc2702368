use super::*;

/// Tests posting a notice with an expiry.
///
/// Expected: Ok with expiry stored
#[tokio::test]
async fn creates_notice_with_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = Utc::now() + Duration::days(3);
    let mut param = notice("Exam Schedule", "academic");
    param.expires_at = Some(expires_at);

    let created = NoticeRepository::new(db).create(param).await?;

    assert!(created.id > 0);
    assert_eq!(created.posted_by, "Principal");
    assert_eq!(created.expires_at, Some(expires_at));

    Ok(())
}
