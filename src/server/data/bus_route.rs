//! Bus route data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::bus_route::BusRoute;

/// Repository providing database operations for bus routes and their tracked location.
pub struct BusRouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusRouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every bus route ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<BusRoute>, DbErr> {
        let routes = entity::prelude::BusRoute::find()
            .order_by_asc(entity::bus_route::Column::Id)
            .all(self.db)
            .await?;

        Ok(routes.into_iter().map(BusRoute::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BusRoute>, DbErr> {
        let route = entity::prelude::BusRoute::find_by_id(id).one(self.db).await?;

        Ok(route.map(BusRoute::from_entity))
    }

    /// Overwrites the current location of a route.
    ///
    /// The location is free text and is stored as given.
    ///
    /// # Returns
    /// - `Ok(Some(BusRoute))` - The updated route
    /// - `Ok(None)` - No route with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_location(
        &self,
        id: i32,
        location: String,
    ) -> Result<Option<BusRoute>, DbErr> {
        let Some(entity) = entity::prelude::BusRoute::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::bus_route::ActiveModel = entity.into();
        active.current_location = ActiveValue::Set(location);
        let updated = active.update(self.db).await?;

        Ok(Some(BusRoute::from_entity(updated)))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::BusRoute::find().count(self.db).await
    }
}
