//! # Warbler web application
//!
//! Wires the [`api`] data layer and the [`ui`] pages into an axum [`Router`]:
//!
//! - sessions live server-side in the same SQLite database (`tower-sessions` with the
//!   sqlx store); the cookie only carries the session id,
//! - [`extract::CurrentUser`] and [`extract::LoggedIn`] turn the session into a user,
//!   the latter enforcing login on protected routes,
//! - [`flash`] carries one-shot messages across redirects.

use std::path::Path;

use axum::http::header::{self, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

pub mod error;
pub mod extract;
pub mod flash;
mod routes;
pub mod settings;

pub use api::auth::CURR_USER_KEY;
pub use settings::Settings;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Directory served under `/static`.
pub fn static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Create the session store inside `pool`, creating its table when missing.
pub async fn session_store(pool: &SqlitePool) -> anyhow::Result<SqliteStore> {
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;
    Ok(store)
}

/// Build the full application router.
pub fn app(pool: SqlitePool, store: SqliteStore, session: &settings::Session) -> Router {
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::hours(session.inactivity)));

    Router::new()
        .route("/", get(routes::home::homepage))
        .route("/signup", get(routes::auth::signup_form).post(routes::auth::signup))
        .route("/login", get(routes::auth::login_form).post(routes::auth::login))
        .route("/logout", get(routes::auth::logout))
        .route("/users", get(routes::users::list_users))
        .route(
            "/users/profile",
            get(routes::users::edit_profile_form).post(routes::users::edit_profile),
        )
        .route("/users/delete", post(routes::users::delete_user))
        .route("/users/follow/{follow_id}", post(routes::users::add_follow))
        .route("/users/stop-following/{follow_id}", post(routes::users::stop_following))
        .route("/users/{user_id}", get(routes::users::show_user))
        .route("/users/{user_id}/following", get(routes::users::show_following))
        .route("/users/{user_id}/followers", get(routes::users::show_followers))
        .route("/users/{user_id}/likes", get(routes::users::show_likes))
        .route(
            "/messages/new",
            get(routes::messages::new_message_form).post(routes::messages::create_message),
        )
        .route("/messages/{message_id}", get(routes::messages::show_message))
        .route("/messages/{message_id}/delete", post(routes::messages::delete_message))
        .route("/messages/{message_id}/like", post(routes::messages::toggle_like))
        .nest_service("/static", ServeDir::new(static_dir()))
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate, public, max-age=0"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}
