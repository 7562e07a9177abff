//! Handler error type and its HTTP rendering.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use ui::PageContext;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error(transparent)]
    Api(#[from] api::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Session unavailable: {0}")]
    SessionMissing(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, detail) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "404 - Page Not Found",
                "The page you're looking for doesn't exist.",
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "403 - Forbidden",
                "You are not allowed to do that.",
            ),
            _ => {
                tracing::error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 - Something Went Wrong",
                    "Please try again later.",
                )
            }
        };

        let body = ui::render_error(PageContext::default(), heading, detail);
        (status, Html(body)).into_response()
    }
}
