//! Session keys.

/// Key under which the logged-in user's id is stored in the session.
pub const CURR_USER_KEY: &str = "curr_user";
