//! Per-request state every page needs: who is looking and which flashes to show.

use std::fmt;

use api::UserInfo;
use serde::{Deserialize, Serialize};

/// Severity of a flash message, used as the `alert-*` CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Info,
    Danger,
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlashCategory::Success => "success",
            FlashCategory::Info => "info",
            FlashCategory::Danger => "danger",
        })
    }
}

/// A one-shot message queued in the session and shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub text: String,
}

impl FlashMessage {
    pub fn new(category: FlashCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// What the layout needs to render the navbar and the flash area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    /// Logged-in user, if any.
    pub user: Option<UserInfo>,
    pub flashes: Vec<FlashMessage>,
}

impl PageContext {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// How a viewer relates to a list of messages: who they are and what they liked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikeState {
    pub viewer_id: Option<i64>,
    pub liked: Vec<i64>,
}

impl LikeState {
    /// Whether the viewer may toggle a like on a message written by `author_id`.
    pub fn can_like(&self, author_id: i64) -> bool {
        self.viewer_id.is_some_and(|id| id != author_id)
    }

    pub fn is_liked(&self, message_id: i64) -> bool {
        self.liked.contains(&message_id)
    }
}

/// Which follow control a user card shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowButton {
    #[default]
    Hidden,
    Follow,
    Unfollow,
}

impl FollowButton {
    /// Pick the control for a card about `user_id`, seen by `viewer_id`.
    pub fn for_user(viewer_id: Option<i64>, user_id: i64, following: &[i64]) -> Self {
        match viewer_id {
            Some(viewer) if viewer == user_id => FollowButton::Hidden,
            Some(_) if following.contains(&user_id) => FollowButton::Unfollow,
            Some(_) => FollowButton::Follow,
            None => FollowButton::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_button_depends_on_viewer() {
        assert_eq!(FollowButton::for_user(None, 2, &[]), FollowButton::Hidden);
        assert_eq!(FollowButton::for_user(Some(2), 2, &[2]), FollowButton::Hidden);
        assert_eq!(FollowButton::for_user(Some(1), 2, &[2]), FollowButton::Unfollow);
        assert_eq!(FollowButton::for_user(Some(1), 3, &[2]), FollowButton::Follow);
    }

    #[test]
    fn own_messages_cannot_be_liked() {
        let state = LikeState {
            viewer_id: Some(5),
            liked: vec![10],
        };
        assert!(!state.can_like(5));
        assert!(state.can_like(6));
        assert!(state.is_liked(10));
        assert!(!LikeState::default().can_like(6));
    }

    #[test]
    fn flash_category_serializes_lowercase() {
        let flash = FlashMessage::new(FlashCategory::Danger, "Access unauthorized.");
        assert_eq!(flash.category.to_string(), "danger");
    }
}
