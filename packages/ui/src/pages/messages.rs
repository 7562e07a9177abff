use api::FeedMessage;
use dioxus::prelude::*;

use crate::components::MessageItem;
use crate::context::{LikeState, PageContext};
use crate::layout::Layout;

#[component]
pub fn MessageDetail(
    context: PageContext,
    message: FeedMessage,
    likes: LikeState,
    can_delete: bool,
) -> Element {
    let delete = if can_delete {
        rsx! {
            form { method: "POST", action: "/messages/{message.id}/delete",
                button { class: "btn btn-outline-danger", "Delete" }
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        Layout { context: context, title: "Warbler".to_string(),
            div { class: "message-detail",
                ul { class: "list-group no-hover",
                    MessageItem {
                        message: message.clone(),
                        can_like: likes.can_like(message.user_id),
                        liked: likes.is_liked(message.id),
                    }
                }
                {delete}
            }
        }
    }
}
