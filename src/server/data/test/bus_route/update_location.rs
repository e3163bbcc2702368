use super::*;

/// Tests overwriting the current location of a route.
///
/// Expected: Ok(Some) with new location stored
#[tokio::test]
async fn updates_current_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusRoute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::create_bus_route(db).await?;
    let repo = BusRouteRepository::new(db);

    let updated = repo
        .update_location(route.id, "Main Chowk".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.current_location, "Main Chowk");

    let tracked = repo.find_by_id(route.id).await?.unwrap();
    assert_eq!(tracked.current_location, "Main Chowk");

    Ok(())
}

/// Tests that any string is accepted as a location, including an empty one.
///
/// Expected: Ok(Some) with empty location
#[tokio::test]
async fn accepts_free_form_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusRoute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = BusRouteFactory::new(db)
        .current_location("Depot")
        .build()
        .await?;

    let updated = BusRouteRepository::new(db)
        .update_location(route.id, String::new())
        .await?
        .unwrap();

    assert_eq!(updated.current_location, "");

    Ok(())
}

/// Tests updating a route that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusRoute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BusRouteRepository::new(db)
        .update_location(7, "Nowhere".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
