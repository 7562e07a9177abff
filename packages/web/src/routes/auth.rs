//! Signup, login and logout.

use api::auth::CURR_USER_KEY;
use api::User;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;
use ui::{FlashCategory, SignupValues};

use crate::error::AppResult;
use crate::extract::CurrentUser;
use crate::flash::flash;
use crate::AppState;

/// Minimum accepted password length on the signup form.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub image_url: String,
}

impl SignupForm {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push("Username is required.".to_string());
        }
        if !looks_like_email(&self.email) {
            errors.push("Invalid email address.".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }
        errors
    }

    fn values(&self) -> SignupValues {
        SignupValues {
            username: self.username.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// A single `@` with something on both sides and a dot in the domain.
pub(crate) fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Put `user` in the session under a fresh session id.
pub(crate) async fn log_in(session: &Session, user: &User) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(CURR_USER_KEY, user.id).await?;
    info!(user_id = user.id, "User logged in");
    Ok(())
}

pub(crate) async fn log_out(session: &Session) -> AppResult<()> {
    if let Some(user_id) = session.remove::<i64>(CURR_USER_KEY).await? {
        info!(user_id, "User logged out");
    }
    session.cycle_id().await?;
    Ok(())
}

pub async fn signup_form(current: CurrentUser) -> AppResult<Html<String>> {
    let context = current.page_context().await?;
    Ok(Html(ui::render_signup(
        context,
        SignupValues::default(),
        Vec::new(),
    )))
}

/// Create the account and log it in. A taken username or email re-renders the form.
pub async fn signup(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        let context = current.page_context().await?;
        return Ok(Html(ui::render_signup(context, form.values(), errors)).into_response());
    }

    let result = User::signup(
        &state.pool,
        form.username.trim(),
        form.email.trim(),
        &form.password,
        Some(form.image_url.as_str()),
    )
    .await;

    match result {
        Ok(user) => {
            log_in(&current.session, &user).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) if e.is_integrity() => {
            flash(&current.session, FlashCategory::Danger, "Username already taken").await?;
            let context = current.page_context().await?;
            Ok(Html(ui::render_signup(context, form.values(), Vec::new())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn login_form(current: CurrentUser) -> AppResult<Html<String>> {
    let context = current.page_context().await?;
    Ok(Html(ui::render_login(context, String::new(), Vec::new())))
}

pub async fn login(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        let context = current.page_context().await?;
        let errors = vec!["Username and password are required.".to_string()];
        return Ok(Html(ui::render_login(context, username.to_string(), errors)).into_response());
    }

    match User::authenticate(&state.pool, username, &form.password).await? {
        Some(user) => {
            log_in(&current.session, &user).await?;
            flash(
                &current.session,
                FlashCategory::Success,
                format!("Hello, {}!", user.username),
            )
            .await?;
            Ok(Redirect::to("/").into_response())
        }
        None => {
            flash(&current.session, FlashCategory::Danger, "Invalid credentials.").await?;
            let context = current.page_context().await?;
            Ok(Html(ui::render_login(context, username.to_string(), Vec::new())).into_response())
        }
    }
}

pub async fn logout(current: CurrentUser) -> AppResult<Redirect> {
    log_out(&current.session).await?;
    flash(
        &current.session,
        FlashCategory::Success,
        "You have successfully logged out.",
    )
    .await?;
    Ok(Redirect::to("/login"))
}
