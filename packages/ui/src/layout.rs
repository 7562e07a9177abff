//! Page shell shared by every view.

use dioxus::prelude::*;

use crate::context::PageContext;
use crate::navbar::Navbar;

pub const STYLESHEET: &str = "/static/stylesheets/style.css";

/// Document head and body: navbar, flash messages, then the page content.
///
/// The `<html>` root is added by [`crate::pages::render`].
#[component]
pub fn Layout(context: PageContext, title: String, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            link { rel: "stylesheet", href: STYLESHEET }
        }
        body {
            Navbar { context: context.clone() }
            div { class: "container",
                for (idx, flash) in context.flashes.iter().enumerate() {
                    div { key: "{idx}", class: "alert alert-{flash.category}", "{flash.text}" }
                }
                {children}
            }
        }
    }
}
