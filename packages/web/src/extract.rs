//! Request extractors that resolve the session into a user.

use api::auth::CURR_USER_KEY;
use api::User;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;
use ui::{FlashCategory, PageContext};

use crate::error::{AppError, AppResult};
use crate::flash::{flash, take_flashes};
use crate::AppState;

/// The session plus whoever it belongs to, if anyone.
pub struct CurrentUser {
    pub session: Session,
    pub user: Option<User>,
}

impl CurrentUser {
    /// Navbar and flash state for a page render. Consumes queued flashes.
    pub async fn page_context(&self) -> AppResult<PageContext> {
        Ok(PageContext {
            user: self.user.as_ref().map(User::to_info),
            flashes: take_flashes(&self.session).await?,
        })
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::SessionMissing(msg))?;
        let state = AppState::from_ref(state);

        let user = match session.get::<i64>(CURR_USER_KEY).await? {
            Some(id) => User::find(&state.pool, id).await?,
            None => None,
        };

        Ok(Self { session, user })
    }
}

/// A logged-in user. Anyone else is sent to `/` with an "Access unauthorized." flash
/// before the handler runs.
pub struct LoggedIn {
    pub session: Session,
    pub user: User,
}

impl LoggedIn {
    pub async fn page_context(&self) -> AppResult<PageContext> {
        Ok(PageContext {
            user: Some(self.user.to_info()),
            flashes: take_flashes(&self.session).await?,
        })
    }
}

impl<S> FromRequestParts<S> for LoggedIn
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match current.user {
            Some(user) => Ok(Self {
                session: current.session,
                user,
            }),
            None => Err(unauthorized(&current.session).await),
        }
    }
}

/// Soft denial: flash and bounce to the home page.
pub async fn unauthorized(session: &Session) -> Response {
    if let Err(e) = flash(session, FlashCategory::Danger, "Access unauthorized.").await {
        return e.into_response();
    }
    Redirect::to("/").into_response()
}
