use api::{FeedMessage, UserInfo, UserStats};
use dioxus::prelude::*;

use crate::components::{MessageList, StatsBar};
use crate::context::{LikeState, PageContext};
use crate::layout::Layout;

/// Landing page for visitors who are not logged in.
#[component]
pub fn HomeAnon(context: PageContext) -> Element {
    rsx! {
        Layout { context: context, title: "Warbler".to_string(),
            div { class: "home-hero",
                h1 { "What's Happening?" }
                h4 { "New to Warbler?" }
                a { href: "/signup", class: "btn btn-primary", "Sign up now" }
            }
        }
    }
}

/// Logged-in home: own card with counters beside the timeline.
#[component]
pub fn Home(
    context: PageContext,
    user: UserInfo,
    stats: UserStats,
    messages: Vec<FeedMessage>,
    likes: LikeState,
) -> Element {
    rsx! {
        Layout { context: context, title: "Warbler".to_string(),
            div { class: "row",
                aside { class: "col-md-4 col-lg-3", id: "home-aside",
                    div { class: "card user-card",
                        img { src: "{user.header_image_url}", alt: "", class: "card-hero" }
                        a { href: "/users/{user.id}", class: "card-link",
                            img { src: "{user.image_url}", alt: "Image for {user.username}", class: "card-image" }
                            p { "@{user.username}" }
                        }
                        StatsBar { user_id: user.id, stats: stats }
                    }
                }
                div { class: "col-lg-6 col-md-8 col-sm-12",
                    MessageList { messages: messages, likes: likes }
                }
            }
        }
    }
}
