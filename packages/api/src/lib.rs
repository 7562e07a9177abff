//! # API crate: data model and persistence for Warbler
//!
//! This crate owns everything the web layer needs to talk to the database. It has no
//! knowledge of HTTP or HTML; handlers in the `warbler` crate call into it and the `ui`
//! crate renders the projections it hands back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing and verification |
//! | [`db`] | SQLite connection pool construction and migrations |
//! | [`error`] | The crate-wide [`Error`] type and its integrity-violation classification |
//! | [`models`] | `User`, `Message`, `Follows`, `Likes` and their client-safe projections |
//!
//! ## Relationship bookkeeping
//!
//! Collections such as a user's `following` or `likes` are never cached on the model
//! structs. Every accessor queries the join tables directly, so the collections can
//! not drift from the rows that back them.

pub mod auth;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{
    FeedMessage, Follows, Likes, Message, ProfileUpdate, User, UserInfo, UserStats,
};
