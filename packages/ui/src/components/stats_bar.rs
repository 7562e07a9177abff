use api::UserStats;
use dioxus::prelude::*;

/// The four profile counters, each an `li.stat`, in the order messages, following,
/// followers, likes.
#[component]
pub fn StatsBar(user_id: i64, stats: UserStats) -> Element {
    rsx! {
        ul { class: "user-stats nav nav-pills",
            li { class: "stat",
                p { class: "small", "Messages" }
                h4 { a { href: "/users/{user_id}", "{stats.messages}" } }
            }
            li { class: "stat",
                p { class: "small", "Following" }
                h4 { a { href: "/users/{user_id}/following", "{stats.following}" } }
            }
            li { class: "stat",
                p { class: "small", "Followers" }
                h4 { a { href: "/users/{user_id}/followers", "{stats.followers}" } }
            }
            li { class: "stat",
                p { class: "small", "Likes" }
                h4 { a { href: "/users/{user_id}/likes", "{stats.likes}" } }
            }
        }
    }
}
