use api::Message;
use axum::extract::State;
use axum::response::Html;
use ui::LikeState;

use super::MESSAGE_LIMIT;
use crate::error::AppResult;
use crate::extract::CurrentUser;
use crate::AppState;

/// Landing page for visitors, timeline for logged-in users.
pub async fn homepage(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Html<String>> {
    let Some(user) = &current.user else {
        let context = current.page_context().await?;
        return Ok(Html(ui::render_home_anon(context)));
    };

    let stats = user.stats(&state.pool).await?;
    let messages = Message::timeline(&state.pool, user.id, MESSAGE_LIMIT).await?;
    let likes = LikeState {
        viewer_id: Some(user.id),
        liked: user.liked_message_ids(&state.pool).await?,
    };
    let context = current.page_context().await?;

    Ok(Html(ui::render_home(
        context,
        user.to_info(),
        stats,
        messages,
        likes,
    )))
}
