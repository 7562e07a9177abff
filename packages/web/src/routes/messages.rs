//! Posting, viewing, deleting and liking messages.

use api::{Error as ApiError, Likes, Message};
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use ui::LikeState;

use crate::error::{AppError, AppResult};
use crate::extract::{unauthorized, CurrentUser, LoggedIn};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageForm {
    pub text: String,
}

fn profile_page(user_id: i64) -> Redirect {
    Redirect::to(&format!("/users/{user_id}"))
}

pub async fn new_message_form(viewer: LoggedIn) -> AppResult<Html<String>> {
    let context = viewer.page_context().await?;
    Ok(Html(ui::render_new_message(context, String::new(), Vec::new())))
}

pub async fn create_message(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Form(form): Form<MessageForm>,
) -> AppResult<Response> {
    match Message::create(&state.pool, viewer.user.id, &form.text).await {
        Ok(_) => Ok(profile_page(viewer.user.id).into_response()),
        Err(ApiError::InvalidMessage(reason)) => {
            let context = viewer.page_context().await?;
            Ok(Html(ui::render_new_message(context, form.text, vec![reason])).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn show_message(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(message_id): Path<i64>,
) -> AppResult<Html<String>> {
    let message = Message::find_with_author(&state.pool, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let likes = match &current.user {
        Some(user) => LikeState {
            viewer_id: Some(user.id),
            liked: user.liked_message_ids(&state.pool).await?,
        },
        None => LikeState::default(),
    };
    let can_delete = current.user_id() == Some(message.user_id);
    let context = current.page_context().await?;

    Ok(Html(ui::render_message_detail(context, message, likes, can_delete)))
}

/// Only the author may delete a message.
pub async fn delete_message(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(message_id): Path<i64>,
) -> AppResult<Response> {
    let message = Message::find(&state.pool, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if message.user_id != viewer.user.id {
        return Ok(unauthorized(&viewer.session).await);
    }

    Message::delete(&state.pool, message.id).await?;
    Ok(profile_page(viewer.user.id).into_response())
}

/// Like or unlike someone else's message.
pub async fn toggle_like(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(message_id): Path<i64>,
) -> AppResult<Redirect> {
    let message = Message::find(&state.pool, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if message.user_id == viewer.user.id {
        return Err(AppError::Forbidden);
    }

    let liked = Likes::toggle(&state.pool, viewer.user.id, message.id).await?;
    tracing::debug!(user_id = viewer.user.id, message_id = message.id, liked, "Like toggled");
    Ok(Redirect::to("/"))
}
