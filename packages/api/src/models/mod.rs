//! Data models for the application.

mod follows;
mod likes;
mod message;
mod user;

pub use follows::Follows;
pub use likes::Likes;
pub use message::{FeedMessage, Message, MAX_MESSAGE_LEN};
pub use user::{
    ProfileUpdate, User, UserInfo, UserStats, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL,
};
