use dioxus::prelude::*;

use crate::context::PageContext;
use crate::layout::Layout;

#[component]
pub fn ErrorPage(context: PageContext, heading: String, detail: String) -> Element {
    rsx! {
        Layout { context: context, title: heading.clone(),
            div { class: "error-page",
                h1 { "{heading}" }
                p { "{detail}" }
                a { href: "/", class: "btn btn-primary", "Take me home" }
            }
        }
    }
}
