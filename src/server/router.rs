//! Route configuration and API documentation.
//!
//! JSON endpoints are registered through `OpenApiRouter` so the OpenAPI document is
//! generated from the same handler annotations that define the routes. The document
//! is served with Swagger UI under `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admission, alumni, bus, event, fee, library, notice, page, stats},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NSKK School API",
        description = "Admissions, fees, transport, library, events, alumni and notices"
    ),
    tags(
        (name = "admission", description = "Admission applications"),
        (name = "fee", description = "Per-student fee ledger"),
        (name = "bus", description = "Bus routes and location tracking"),
        (name = "library", description = "Library catalogue and circulation"),
        (name = "event", description = "School events"),
        (name = "alumni", description = "Alumni directory"),
        (name = "notice", description = "Notice board"),
        (name = "stats", description = "Dashboard counters")
    )
)]
struct ApiDoc;

/// Builds the application router without state.
///
/// The session layer is applied by the caller so tests can swap in a memory store.
pub fn router() -> Router<AppState> {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(admission::apply_admission))
        .routes(routes!(admission::get_applications))
        .routes(routes!(admission::approve_admission))
        .routes(routes!(fee::get_student_fees))
        .routes(routes!(fee::create_fee))
        .routes(routes!(fee::pay_fee))
        .routes(routes!(bus::get_routes))
        .routes(routes!(bus::track_route))
        .routes(routes!(bus::update_location))
        .routes(routes!(library::get_books))
        .routes(routes!(library::issue_book))
        .routes(routes!(library::return_book))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(alumni::get_alumni, alumni::register_alumni))
        .routes(routes!(notice::get_notices, notice::create_notice))
        .routes(routes!(stats::get_stats))
        .split_for_parts();

    Router::new()
        .route("/", get(page::index))
        .route("/about", get(page::about))
        .route("/dashboard", get(page::dashboard))
        .merge(api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
}
