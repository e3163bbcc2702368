use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BusRouteDto {
    pub id: i32,
    pub route_name: String,
    pub bus_number: String,
    pub driver_name: String,
    pub current_location: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBusLocationDto {
    /// Free-form location; stored verbatim.
    pub location: String,
}
