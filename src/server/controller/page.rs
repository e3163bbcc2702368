//! Static HTML pages.
//!
//! The pages are compiled into the binary. Only the dashboard looks at the
//! session, and only to decide whether to show itself.

use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::AuthSession};

const INDEX_PAGE: &str = include_str!("../../../pages/index.html");
const ABOUT_PAGE: &str = include_str!("../../../pages/about.html");
const DASHBOARD_PAGE: &str = include_str!("../../../pages/dashboard.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn about() -> Html<&'static str> {
    Html(ABOUT_PAGE)
}

/// Serves the dashboard to signed-in users.
///
/// # Returns
/// - `200 OK` - The session holds a `user_id`
/// - `303 See Other` to `/` - No user in the session
/// - `500 Internal Server Error` - Session store error
pub async fn dashboard(session: Session) -> Result<Response, AppError> {
    if !AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(Html(DASHBOARD_PAGE).into_response())
}
