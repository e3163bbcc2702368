use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping stats endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Dashboard counters.
///
/// Recomputed on every call; `active_routes` counts every bus route.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Current totals", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
