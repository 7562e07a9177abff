//! User listing, profiles, the follow graph and account management.

use api::{Message, ProfileUpdate, User};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use ui::{FlashCategory, FollowButton, LikeState, ProfileSummary, ProfileValues};

use super::auth::{log_out, looks_like_email};
use super::MESSAGE_LIMIT;
use crate::error::{AppError, AppResult};
use crate::extract::{CurrentUser, LoggedIn};
use crate::flash::flash;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: String,
    pub location: String,
    pub password: String,
}

impl ProfileForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push("Username is required.".to_string());
        }
        if !looks_like_email(&self.email) {
            errors.push("Invalid email address.".to_string());
        }
        errors
    }

    fn values(&self) -> ProfileValues {
        ProfileValues {
            username: self.username.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
            header_image_url: self.header_image_url.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
        }
    }

    fn update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            image_url: Some(self.image_url.clone()),
            header_image_url: Some(self.header_image_url.clone()),
            bio: Some(self.bio.clone()),
            location: Some(self.location.clone()),
        }
    }
}

fn current_values(user: &User) -> ProfileValues {
    ProfileValues {
        username: user.username.clone(),
        email: user.email.clone(),
        image_url: user.image_url.clone(),
        header_image_url: user.header_image_url.clone(),
        bio: user.bio.clone().unwrap_or_default(),
        location: user.location.clone().unwrap_or_default(),
    }
}

async fn load_user(pool: &SqlitePool, user_id: i64) -> AppResult<User> {
    User::find(pool, user_id).await?.ok_or(AppError::NotFound)
}

/// Ids of everyone the viewer follows. Empty for anonymous visitors.
async fn following_ids(pool: &SqlitePool, viewer: Option<&User>) -> AppResult<Vec<i64>> {
    match viewer {
        Some(viewer) => Ok(viewer
            .following(pool)
            .await?
            .iter()
            .map(|u| u.id)
            .collect()),
        None => Ok(Vec::new()),
    }
}

async fn like_state(pool: &SqlitePool, viewer: Option<&User>) -> AppResult<LikeState> {
    match viewer {
        Some(viewer) => Ok(LikeState {
            viewer_id: Some(viewer.id),
            liked: viewer.liked_message_ids(pool).await?,
        }),
        None => Ok(LikeState::default()),
    }
}

async fn profile_summary(
    pool: &SqlitePool,
    profile: &User,
    viewer: Option<&User>,
) -> AppResult<ProfileSummary> {
    let following = following_ids(pool, viewer).await?;
    let viewer_id = viewer.map(|v| v.id);

    Ok(ProfileSummary {
        profile: profile.to_info(),
        stats: profile.stats(pool).await?,
        is_owner: viewer_id == Some(profile.id),
        follow: FollowButton::for_user(viewer_id, profile.id, &following),
    })
}

fn following_page(user_id: i64) -> Redirect {
    Redirect::to(&format!("/users/{user_id}/following"))
}

pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Html<String>> {
    let users = User::search(&state.pool, params.q.as_deref()).await?;
    let following = following_ids(&state.pool, current.user.as_ref()).await?;
    let context = current.page_context().await?;

    Ok(Html(ui::render_users_index(
        context,
        users.iter().map(User::to_info).collect(),
        params.q.unwrap_or_default(),
        following,
    )))
}

pub async fn show_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let profile = load_user(&state.pool, user_id).await?;
    let summary = profile_summary(&state.pool, &profile, current.user.as_ref()).await?;
    let messages = Message::by_author(&state.pool, profile.id, MESSAGE_LIMIT).await?;
    let likes = like_state(&state.pool, current.user.as_ref()).await?;
    let context = current.page_context().await?;

    Ok(Html(ui::render_user_detail(context, summary, messages, likes)))
}

pub async fn show_following(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let profile = load_user(&state.pool, user_id).await?;
    let users = profile.following(&state.pool).await?;
    follow_list(&state.pool, viewer, &profile, "Following", users).await
}

pub async fn show_followers(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let profile = load_user(&state.pool, user_id).await?;
    let users = profile.followers(&state.pool).await?;
    follow_list(&state.pool, viewer, &profile, "Followers", users).await
}

async fn follow_list(
    pool: &SqlitePool,
    viewer: LoggedIn,
    profile: &User,
    heading: &str,
    users: Vec<User>,
) -> AppResult<Html<String>> {
    let summary = profile_summary(pool, profile, Some(&viewer.user)).await?;
    let following = following_ids(pool, Some(&viewer.user)).await?;
    let context = viewer.page_context().await?;

    Ok(Html(ui::render_follow_list(
        context,
        summary,
        heading,
        users.iter().map(User::to_info).collect(),
        following,
    )))
}

pub async fn show_likes(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let profile = load_user(&state.pool, user_id).await?;
    let summary = profile_summary(&state.pool, &profile, Some(&viewer.user)).await?;
    let messages = Message::liked_by(&state.pool, profile.id).await?;
    let likes = like_state(&state.pool, Some(&viewer.user)).await?;
    let context = viewer.page_context().await?;

    Ok(Html(ui::render_liked_messages(context, summary, messages, likes)))
}

/// Start following a user. Following yourself is refused.
pub async fn add_follow(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(follow_id): Path<i64>,
) -> AppResult<Redirect> {
    let followed = load_user(&state.pool, follow_id).await?;
    if followed.id == viewer.user.id {
        return Err(AppError::Forbidden);
    }

    viewer.user.follow(&state.pool, followed.id).await?;
    Ok(following_page(viewer.user.id))
}

pub async fn stop_following(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Path(follow_id): Path<i64>,
) -> AppResult<Redirect> {
    viewer.user.unfollow(&state.pool, follow_id).await?;
    Ok(following_page(viewer.user.id))
}

pub async fn edit_profile_form(viewer: LoggedIn) -> AppResult<Html<String>> {
    let values = current_values(&viewer.user);
    let context = viewer.page_context().await?;
    Ok(Html(ui::render_edit_profile(context, values, Vec::new())))
}

/// Save profile edits once the current password checks out.
pub async fn edit_profile(
    State(state): State<AppState>,
    viewer: LoggedIn,
    Form(form): Form<ProfileForm>,
) -> AppResult<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        let context = viewer.page_context().await?;
        return Ok(Html(ui::render_edit_profile(context, form.values(), errors)).into_response());
    }

    let authenticated =
        User::authenticate(&state.pool, &viewer.user.username, &form.password).await?;
    if authenticated.is_none() {
        flash(
            &viewer.session,
            FlashCategory::Danger,
            "Wrong password, please try again.",
        )
        .await?;
        return Ok(Redirect::to("/").into_response());
    }

    match viewer.user.update_profile(&state.pool, &form.update()).await {
        Ok(user) => {
            info!(user_id = user.id, "Profile updated");
            Ok(Redirect::to(&format!("/users/{}", user.id)).into_response())
        }
        Err(e) if e.is_integrity() => {
            flash(&viewer.session, FlashCategory::Danger, "Username already taken").await?;
            let context = viewer.page_context().await?;
            Ok(Html(ui::render_edit_profile(context, form.values(), Vec::new())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_user(State(state): State<AppState>, viewer: LoggedIn) -> AppResult<Redirect> {
    viewer.user.delete(&state.pool).await?;
    info!(user_id = viewer.user.id, "User deleted");
    log_out(&viewer.session).await?;
    Ok(Redirect::to("/signup"))
}
