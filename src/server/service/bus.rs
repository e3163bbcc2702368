//! Bus service for route listing and location tracking.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::bus_route::BusRouteRepository, error::AppError, model::bus_route::BusRoute,
};

pub struct BusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_routes(&self) -> Result<Vec<BusRoute>, AppError> {
        Ok(BusRouteRepository::new(self.db).get_all().await?)
    }

    /// Gets a single route; its `current_location` is the tracked position.
    ///
    /// # Returns
    /// - `Ok(BusRoute)` - The route
    /// - `Err(AppError::NotFound)` - No route with that ID
    pub async fn track(&self, route_id: i32) -> Result<BusRoute, AppError> {
        BusRouteRepository::new(self.db)
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))
    }

    /// Replaces the tracked location of a route.
    ///
    /// # Returns
    /// - `Ok(BusRoute)` - The updated route
    /// - `Err(AppError::NotFound)` - No route with that ID
    pub async fn update_location(
        &self,
        route_id: i32,
        location: String,
    ) -> Result<BusRoute, AppError> {
        let route = BusRouteRepository::new(self.db)
            .update_location(route_id, location)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        tracing::debug!(
            "Bus route {} now at '{}'",
            route.id,
            route.current_location
        );

        Ok(route)
    }
}
