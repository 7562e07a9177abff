//! This crate contains all server-rendered UI for Warbler.
//!
//! Pages are ordinary Dioxus components. They are rendered once per request with
//! `dioxus-ssr`; there is no client-side runtime, so components hold no hooks or
//! event handlers and take everything they show as props.

pub mod components;
pub mod context;
pub mod pages;

mod layout;
mod navbar;

pub use context::{FlashCategory, FlashMessage, FollowButton, LikeState, PageContext};
pub use layout::{Layout, STYLESHEET};
pub use navbar::Navbar;
pub use pages::*;
