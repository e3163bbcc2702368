use super::*;

/// Tests listing routes with their tracked location.
///
/// Expected: Ok with routes ordered by ID
#[tokio::test]
async fn lists_routes_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusRoute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let north = BusRouteFactory::new(db)
        .route_name("North Loop")
        .build()
        .await?;
    let south = factory::create_bus_route(db).await?;

    let routes = BusRouteRepository::new(db).get_all().await?;

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].id, north.id);
    assert_eq!(routes[0].route_name, "North Loop");
    assert_eq!(routes[0].current_location, "School");
    assert_eq!(routes[1].id, south.id);

    Ok(())
}

/// Tests that the count matches the number of routes.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_every_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BusRoute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bus_route(db).await?;
    factory::create_bus_route(db).await?;

    assert_eq!(BusRouteRepository::new(db).count().await?, 2);

    Ok(())
}
