//! Authentication primitives shared by the model layer and the web handlers.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::CURR_USER_KEY;
