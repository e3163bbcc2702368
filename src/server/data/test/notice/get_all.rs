use super::*;

/// Inserts a notice with a fixed creation time.
async fn insert_posted_at(
    db: &DatabaseConnection,
    title: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::notice::Model, DbErr> {
    entity::notice::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set(format!("{} content", title)),
        category: ActiveValue::Set("general".to_string()),
        posted_by: ActiveValue::Set("Principal".to_string()),
        created_at: ActiveValue::Set(created_at),
        expires_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests that notices are ordered by creation time, not insertion order.
///
/// Expected: Ok with the most recently posted notice first even though it has the lower ID
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let recent = insert_posted_at(db, "Recent", now - Duration::hours(1)).await?;
    let backdated = insert_posted_at(db, "Backdated", now - Duration::days(3)).await?;
    assert!(backdated.id > recent.id);

    let notices = NoticeRepository::new(db).get_all(None).await?;

    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].id, recent.id);
    assert_eq!(notices[1].id, backdated.id);

    Ok(())
}

/// Tests that notices posted at the same instant are ordered by descending ID.
///
/// Expected: Ok with the later insert first
#[tokio::test]
async fn breaks_ties_by_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let posted = Utc::now() - Duration::hours(2);
    let first = insert_posted_at(db, "First", posted).await?;
    let second = insert_posted_at(db, "Second", posted).await?;

    let notices = NoticeRepository::new(db).get_all(None).await?;

    assert_eq!(notices[0].id, second.id);
    assert_eq!(notices[1].id, first.id);

    Ok(())
}

/// Tests that expired notices are still listed.
///
/// Expected: Ok with the expired notice included
#[tokio::test]
async fn includes_expired_notices() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = notice("Holiday", "event");
    param.expires_at = Some(Utc::now() - Duration::days(30));

    let repo = NoticeRepository::new(db);
    repo.create(param).await?;

    assert_eq!(repo.get_all(None).await?.len(), 1);

    Ok(())
}

/// Tests filtering notices by category.
///
/// Expected: Ok with only matching notices
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoticeRepository::new(db);
    repo.create(notice("Bus Delay", "general")).await?;
    repo.create(notice("Unit Test", "academic")).await?;

    let notices = repo.get_all(Some("academic".to_string())).await?;

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Unit Test");

    Ok(())
}
