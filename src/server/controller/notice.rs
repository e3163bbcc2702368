use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notice::{CreateNoticeDto, NoticeDto},
    },
    server::{
        controller::CategoryParam, error::AppError, model::notice::CreateNoticeParam,
        service::notice::NoticeService, state::AppState,
    },
};

/// Tag for grouping notice endpoints in OpenAPI documentation
pub static NOTICE_TAG: &str = "notice";

/// List notices, newest first.
///
/// Expired notices are still listed.
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = NOTICE_TAG,
    params(CategoryParam),
    responses(
        (status = 200, description = "Matching notices", body = Vec<NoticeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notices(
    State(state): State<AppState>,
    Query(params): Query<CategoryParam>,
) -> Result<impl IntoResponse, AppError> {
    let notices = NoticeService::new(&state.db)
        .get_all(params.into_filter())
        .await?;

    let dtos: Vec<NoticeDto> = notices.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Post a notice.
///
/// The optional `expires_at` (`YYYY-MM-DD HH:MM`) is stored for reference only.
#[utoipa::path(
    post,
    path = "/api/notices",
    tag = NOTICE_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice posted", body = NoticeDto),
        (status = 400, description = "Malformed expiry date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateNoticeParam::try_from(payload)?;
    let notice = NoticeService::new(&state.db).post(param).await?;

    Ok((StatusCode::CREATED, Json(notice.into_dto())))
}
