use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::CategoryParam, error::AppError, model::event::CreateEventParam,
        service::event::EventService, state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List events, latest event date first.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(CategoryParam),
    responses(
        (status = 200, description = "Matching events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<CategoryParam>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_all(params.into_filter())
        .await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an event.
///
/// `event_date` must be formatted `YYYY-MM-DD HH:MM`.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Malformed event date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateEventParam::try_from(payload)?;
    let event = EventService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}
