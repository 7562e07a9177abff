//! Route handlers, grouped by the pages they serve.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppResult;
use crate::extract::CurrentUser;

pub mod auth;
pub mod home;
pub mod messages;
pub mod users;

/// Most messages shown on a timeline or profile.
const MESSAGE_LIMIT: i64 = 100;

pub async fn not_found(current: CurrentUser) -> AppResult<Response> {
    let context = current.page_context().await?;
    let body = ui::render_error(
        context,
        "404 - Page Not Found",
        "The page you're looking for doesn't exist.",
    );
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}
