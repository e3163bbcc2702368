use super::*;

/// Tests that events are listed latest date first.
///
/// Expected: Ok with descending event dates
#[tokio::test]
async fn orders_by_event_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(event("Early", "academic", 2)).await?;
    repo.create(event("Late", "cultural", 20)).await?;
    repo.create(event("Middle", "sports", 10)).await?;

    let events = repo.get_all(None).await?;
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();

    assert_eq!(titles, vec!["Late", "Middle", "Early"]);

    Ok(())
}

/// Tests that events on the same date are ordered by descending ID.
///
/// Expected: Ok with newer record first
#[tokio::test]
async fn breaks_ties_by_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let first = repo.create(event("First", "sports", 5)).await?;
    let second = repo.create(event("Second", "sports", 5)).await?;

    let events = repo.get_all(None).await?;

    assert_eq!(events[0].id, second.id);
    assert_eq!(events[1].id, first.id);

    Ok(())
}

/// Tests filtering events by category.
///
/// Expected: Ok with only matching events
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(event("Football", "sports", 3)).await?;
    repo.create(event("Dance", "cultural", 4)).await?;

    let events = repo.get_all(Some("cultural".to_string())).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Dance");

    Ok(())
}
