//! Bus route domain model.
//!
//! Tracking is a stored free-form location string; there is no geospatial model.

use crate::model::bus::BusRouteDto;

#[derive(Debug, Clone, PartialEq)]
pub struct BusRoute {
    pub id: i32,
    pub route_name: String,
    pub bus_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub capacity: i32,
    pub current_location: String,
    pub stops: Option<String>,
}

impl BusRoute {
    pub fn into_dto(self) -> BusRouteDto {
        BusRouteDto {
            id: self.id,
            route_name: self.route_name,
            bus_number: self.bus_number,
            driver_name: self.driver_name,
            current_location: self.current_location,
        }
    }

    pub fn from_entity(entity: entity::bus_route::Model) -> Self {
        Self {
            id: entity.id,
            route_name: entity.route_name,
            bus_number: entity.bus_number,
            driver_name: entity.driver_name,
            driver_phone: entity.driver_phone,
            capacity: entity.capacity,
            current_location: entity.current_location,
            stops: entity.stops,
        }
    }
}
