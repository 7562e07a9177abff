use api::{UserInfo, UserStats};
use dioxus::prelude::*;

use super::StatsBar;
use crate::context::FollowButton;

/// Header image, avatar, counters and the controls the viewer has on this profile.
#[component]
pub fn ProfileHeader(
    profile: UserInfo,
    stats: UserStats,
    is_owner: bool,
    follow: FollowButton,
) -> Element {
    let bio = profile.bio.clone().unwrap_or_default();
    let location = profile.location.clone().unwrap_or_default();

    let controls = if is_owner {
        rsx! {
            a { href: "/users/profile", class: "btn btn-outline-secondary", "Edit Profile" }
            form { method: "POST", action: "/users/delete", class: "form-inline",
                button { class: "btn btn-outline-danger", "Delete Profile" }
            }
        }
    } else {
        match follow {
            FollowButton::Follow => rsx! {
                form { method: "POST", action: "/users/follow/{profile.id}",
                    button { class: "btn btn-outline-primary", "Follow" }
                }
            },
            FollowButton::Unfollow => rsx! {
                form { method: "POST", action: "/users/stop-following/{profile.id}",
                    button { class: "btn btn-primary", "Unfollow" }
                }
            },
            FollowButton::Hidden => rsx! {},
        }
    };

    rsx! {
        div { id: "warbler-hero", class: "full-width",
            img { src: "{profile.header_image_url}", alt: "", class: "header-image" }
        }
        img { src: "{profile.image_url}", alt: "Image for {profile.username}", id: "profile-avatar" }
        div { class: "row full-width",
            div { class: "col-sm-9",
                StatsBar { user_id: profile.id, stats: stats }
                div { class: "profile-controls", {controls} }
            }
        }
        div { class: "profile-info",
            h4 { id: "sidebar-username", "@{profile.username}" }
            p { class: "user-bio", "{bio}" }
            p { class: "user-location", "{location}" }
        }
    }
}
