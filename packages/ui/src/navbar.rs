use dioxus::prelude::*;

use crate::context::PageContext;

#[component]
pub fn Navbar(context: PageContext) -> Element {
    let links = match &context.user {
        Some(user) => rsx! {
            li {
                a { href: "/users/{user.id}",
                    img { class: "navbar-avatar", src: "{user.image_url}", alt: "{user.username}" }
                    "@{user.username}"
                }
            }
            li { a { href: "/messages/new", "New Message" } }
            li { a { href: "/logout", "Log out" } }
        },
        None => rsx! {
            li { a { href: "/signup", "Sign up" } }
            li { a { href: "/login", "Log in" } }
        },
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-header",
                a { class: "navbar-brand", href: "/",
                    span { "Warbler" }
                }
            }
            form { class: "navbar-form", action: "/users",
                input { name: "q", class: "form-control", placeholder: "Search Warbler" }
                button { class: "btn btn-default", "Search" }
            }
            ul { class: "nav navbar-nav navbar-right", {links} }
        }
    }
}
