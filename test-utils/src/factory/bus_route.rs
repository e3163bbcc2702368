//! Bus route factory for creating test bus route entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bus routes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let route = BusRouteFactory::new(&db)
///     .route_name("North Loop")
///     .current_location("Market Square")
///     .build()
///     .await?;
/// ```
pub struct BusRouteFactory<'a> {
    db: &'a DatabaseConnection,
    route_name: String,
    bus_number: String,
    driver_name: String,
    capacity: i32,
    current_location: String,
}

impl<'a> BusRouteFactory<'a> {
    /// Creates a new BusRouteFactory with default values.
    ///
    /// Defaults:
    /// - route_name: `"Route {id}"` where id is auto-incremented
    /// - bus_number: `"BUS-{id}"`
    /// - capacity: `50`
    /// - current_location: `"School"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            route_name: format!("Route {}", id),
            bus_number: format!("BUS-{}", id),
            driver_name: format!("Driver {}", id),
            capacity: 50,
            current_location: "School".to_string(),
        }
    }

    pub fn route_name(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = route_name.into();
        self
    }

    pub fn driver_name(mut self, driver_name: impl Into<String>) -> Self {
        self.driver_name = driver_name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn current_location(mut self, current_location: impl Into<String>) -> Self {
        self.current_location = current_location.into();
        self
    }

    /// Builds and inserts the bus route entity into the database.
    pub async fn build(self) -> Result<entity::bus_route::Model, DbErr> {
        entity::bus_route::ActiveModel {
            route_name: ActiveValue::Set(self.route_name),
            bus_number: ActiveValue::Set(self.bus_number),
            driver_name: ActiveValue::Set(self.driver_name),
            driver_phone: ActiveValue::Set("9822222222".to_string()),
            capacity: ActiveValue::Set(self.capacity),
            current_location: ActiveValue::Set(self.current_location),
            stops: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bus route with default values.
pub async fn create_bus_route(db: &DatabaseConnection) -> Result<entity::bus_route::Model, DbErr> {
    BusRouteFactory::new(db).build().await
}
