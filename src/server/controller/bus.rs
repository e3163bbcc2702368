use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        bus::{BusRouteDto, UpdateBusLocationDto},
    },
    server::{error::AppError, service::bus::BusService, state::AppState},
};

/// Tag for grouping bus endpoints in OpenAPI documentation
pub static BUS_TAG: &str = "bus";

/// List all bus routes with their current location.
#[utoipa::path(
    get,
    path = "/api/bus/routes",
    tag = BUS_TAG,
    responses(
        (status = 200, description = "All bus routes", body = Vec<BusRouteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_routes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let routes = BusService::new(&state.db).get_routes().await?;

    let dtos: Vec<BusRouteDto> = routes.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Track a single bus route.
///
/// The route's `current_location` is the last location reported for it.
#[utoipa::path(
    get,
    path = "/api/bus/tracking/{route_id}",
    tag = BUS_TAG,
    params(
        ("route_id" = i32, Path, description = "Bus route ID")
    ),
    responses(
        (status = 200, description = "The route", body = BusRouteDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn track_route(
    State(state): State<AppState>,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let route = BusService::new(&state.db).track(route_id).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

/// Report the current location of a bus.
///
/// Overwrites the stored location with whatever string is sent.
///
/// # Returns
/// - `200 OK` - Location updated
/// - `404 Not Found` - No route with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bus/{route_id}/location",
    tag = BUS_TAG,
    params(
        ("route_id" = i32, Path, description = "Bus route ID")
    ),
    request_body = UpdateBusLocationDto,
    responses(
        (status = 200, description = "Location updated", body = SuccessDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(route_id): Path<i32>,
    Json(payload): Json<UpdateBusLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    BusService::new(&state.db)
        .update_location(route_id, payload.location)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
