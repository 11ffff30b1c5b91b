//! Identity command handlers.

mod login;
mod logout;

pub use login::{LoginCommand, LoginHandler};
pub use logout::{LogoutCommand, LogoutHandler};
