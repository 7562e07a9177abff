//! Building blocks shared between pages.

mod message_list;
mod profile_header;
mod stats_bar;
mod user_card;

pub use message_list::{MessageItem, MessageList};
pub use profile_header::ProfileHeader;
pub use stats_bar::StatsBar;
pub use user_card::UserCard;
