use api::FeedMessage;
use dioxus::prelude::*;

use crate::context::LikeState;

/// A message with its author, timestamp and, for logged-in viewers, a like toggle.
#[component]
pub fn MessageItem(message: FeedMessage, can_like: bool, liked: bool) -> Element {
    let posted = message.timestamp.format("%d %B %Y").to_string();
    let like_class = if liked { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" };
    let like_label = if liked { "Unlike" } else { "Like" };

    let like = if can_like {
        rsx! {
            form { method: "POST", action: "/messages/{message.id}/like", class: "messages-like",
                button { class: like_class, "{like_label}" }
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        li { class: "list-group-item",
            a { href: "/messages/{message.id}", class: "message-link" }
            a { href: "/users/{message.user_id}",
                img { src: "{message.image_url}", alt: "", class: "timeline-image" }
            }
            div { class: "message-area",
                a { href: "/users/{message.user_id}", "@{message.username}" }
                span { class: "text-muted", "{posted}" }
                p { "{message.text}" }
            }
            {like}
        }
    }
}

#[component]
pub fn MessageList(messages: Vec<FeedMessage>, likes: LikeState) -> Element {
    if messages.is_empty() {
        return rsx! {
            p { class: "no-messages", "No messages yet." }
        };
    }

    rsx! {
        ul { class: "list-group", id: "messages",
            for message in messages.iter() {
                MessageItem {
                    key: "{message.id}",
                    message: message.clone(),
                    can_like: likes.can_like(message.user_id),
                    liked: likes.is_liked(message.id),
                }
            }
        }
    }
}
