use api::{FeedMessage, UserInfo, UserStats};
use dioxus::prelude::*;

use crate::components::{MessageList, ProfileHeader, UserCard};
use crate::context::{FollowButton, LikeState, PageContext};
use crate::layout::Layout;

/// Everything the profile header needs, computed by the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub profile: UserInfo,
    pub stats: UserStats,
    pub is_owner: bool,
    pub follow: FollowButton,
}

#[component]
pub fn UsersIndex(
    context: PageContext,
    users: Vec<UserInfo>,
    query: String,
    following: Vec<i64>,
) -> Element {
    let viewer_id = context.user_id();

    rsx! {
        Layout { context: context.clone(), title: "Warbler".to_string(),
            div { class: "row justify-content-end",
                if users.is_empty() {
                    h3 { class: "no-results", "Sorry, no users found" }
                    if !query.is_empty() {
                        p { class: "text-muted", "No usernames contain {query}." }
                    }
                }
                for user in users.iter() {
                    div { key: "{user.id}", class: "col-lg-4 col-md-6 col-12",
                        UserCard {
                            user: user.clone(),
                            follow: FollowButton::for_user(viewer_id, user.id, &following),
                        }
                    }
                }
            }
        }
    }
}

/// Profile page with the user's messages.
#[component]
pub fn UserDetail(
    context: PageContext,
    summary: ProfileSummary,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> Element {
    let title = format!("@{}", summary.profile.username);

    rsx! {
        Layout { context: context, title: title,
            ProfileHeader {
                profile: summary.profile.clone(),
                stats: summary.stats,
                is_owner: summary.is_owner,
                follow: summary.follow,
            }
            div { class: "col-lg-6 col-md-8 col-sm-12",
                MessageList { messages: messages, likes: likes }
            }
        }
    }
}

/// Following or followers page: the profile header over a grid of user cards.
#[component]
pub fn FollowList(
    context: PageContext,
    summary: ProfileSummary,
    heading: String,
    users: Vec<UserInfo>,
    following: Vec<i64>,
) -> Element {
    let viewer_id = context.user_id();
    let title = format!("{heading} · @{}", summary.profile.username);

    rsx! {
        Layout { context: context.clone(), title: title,
            ProfileHeader {
                profile: summary.profile.clone(),
                stats: summary.stats,
                is_owner: summary.is_owner,
                follow: summary.follow,
            }
            h3 { class: "follow-heading", "{heading}" }
            div { class: "row",
                for user in users.iter() {
                    div { key: "{user.id}", class: "col-lg-4 col-md-6 col-12",
                        UserCard {
                            user: user.clone(),
                            follow: FollowButton::for_user(viewer_id, user.id, &following),
                        }
                    }
                }
            }
        }
    }
}

/// Messages a user has liked.
#[component]
pub fn LikedMessages(
    context: PageContext,
    summary: ProfileSummary,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> Element {
    let title = format!("Likes · @{}", summary.profile.username);

    rsx! {
        Layout { context: context, title: title,
            ProfileHeader {
                profile: summary.profile.clone(),
                stats: summary.stats,
                is_owner: summary.is_owner,
                follow: summary.follow,
            }
            h3 { class: "follow-heading", "Likes" }
            div { class: "col-lg-6 col-md-8 col-sm-12",
                MessageList { messages: messages, likes: likes }
            }
        }
    }
}
