use api::UserInfo;
use dioxus::prelude::*;

use crate::context::FollowButton;

#[component]
pub fn UserCard(user: UserInfo, follow: FollowButton) -> Element {
    let bio = user.bio.clone().unwrap_or_default();

    let control = match follow {
        FollowButton::Follow => rsx! {
            form { method: "POST", action: "/users/follow/{user.id}",
                button { class: "btn btn-outline-primary btn-sm", "Follow" }
            }
        },
        FollowButton::Unfollow => rsx! {
            form { method: "POST", action: "/users/stop-following/{user.id}",
                button { class: "btn btn-primary btn-sm", "Unfollow" }
            }
        },
        FollowButton::Hidden => rsx! {},
    };

    rsx! {
        div { class: "card user-card",
            div { class: "card-contents",
                a { href: "/users/{user.id}", class: "card-link",
                    img { src: "{user.image_url}", alt: "Image for {user.username}", class: "card-image" }
                    p { "@{user.username}" }
                }
                {control}
            }
            p { class: "card-bio", "{bio}" }
        }
    }
}
