//! Full pages and the functions that render them to HTML strings.
//!
//! Handlers never touch Dioxus directly: each `render_*` function takes plain data,
//! builds the component tree and returns the finished document.

use api::{FeedMessage, UserInfo, UserStats};
use dioxus::prelude::*;

use crate::context::{LikeState, PageContext};

mod errors;
mod forms;
mod home;
mod messages;
mod users;

pub use errors::ErrorPage;
pub use forms::{
    EditProfilePage, LoginPage, NewMessagePage, ProfileValues, SignupPage, SignupValues,
};
pub use home::{Home, HomeAnon};
pub use messages::MessageDetail;
pub use users::{FollowList, LikedMessages, ProfileSummary, UserDetail, UsersIndex};

/// Render an element tree as a complete HTML document.
pub fn render(page: Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    )
}

pub fn render_home_anon(context: PageContext) -> String {
    render(rsx! { HomeAnon { context: context } })
}

pub fn render_home(
    context: PageContext,
    user: UserInfo,
    stats: UserStats,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> String {
    render(rsx! {
        Home { context: context, user: user, stats: stats, messages: messages, likes: likes }
    })
}

pub fn render_users_index(
    context: PageContext,
    users: Vec<UserInfo>,
    query: String,
    following: Vec<i64>,
) -> String {
    render(rsx! {
        UsersIndex { context: context, users: users, query: query, following: following }
    })
}

pub fn render_user_detail(
    context: PageContext,
    summary: ProfileSummary,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> String {
    render(rsx! {
        UserDetail { context: context, summary: summary, messages: messages, likes: likes }
    })
}

pub fn render_follow_list(
    context: PageContext,
    summary: ProfileSummary,
    heading: &str,
    users: Vec<UserInfo>,
    following: Vec<i64>,
) -> String {
    render(rsx! {
        FollowList {
            context: context,
            summary: summary,
            heading: heading.to_string(),
            users: users,
            following: following,
        }
    })
}

pub fn render_liked_messages(
    context: PageContext,
    summary: ProfileSummary,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> String {
    render(rsx! {
        LikedMessages { context: context, summary: summary, messages: messages, likes: likes }
    })
}

pub fn render_signup(context: PageContext, values: SignupValues, errors: Vec<String>) -> String {
    render(rsx! { SignupPage { context: context, values: values, errors: errors } })
}

pub fn render_login(context: PageContext, username: String, errors: Vec<String>) -> String {
    render(rsx! { LoginPage { context: context, username: username, errors: errors } })
}

pub fn render_edit_profile(
    context: PageContext,
    values: ProfileValues,
    errors: Vec<String>,
) -> String {
    render(rsx! { EditProfilePage { context: context, values: values, errors: errors } })
}

pub fn render_new_message(context: PageContext, text: String, errors: Vec<String>) -> String {
    render(rsx! { NewMessagePage { context: context, text: text, errors: errors } })
}

pub fn render_message_detail(
    context: PageContext,
    message: FeedMessage,
    likes: LikeState,
    can_delete: bool,
) -> String {
    render(rsx! {
        MessageDetail { context: context, message: message, likes: likes, can_delete: can_delete }
    })
}

pub fn render_error(context: PageContext, heading: &str, detail: &str) -> String {
    render(rsx! {
        ErrorPage { context: context, heading: heading.to_string(), detail: detail.to_string() }
    })
}
