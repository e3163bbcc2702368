use super::*;

/// Tests creating an event.
///
/// Expected: Ok with event stored and counted
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let created = repo.create(event("Sports Day", "sports", 14)).await?;

    assert!(created.id > 0);
    assert_eq!(created.title, "Sports Day");
    assert_eq!(
        created.event_date,
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap()
    );
    assert!(created.image_url.is_none());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
