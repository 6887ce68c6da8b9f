//! Server HTTP handlers.

mod check;
mod home;

pub use check::{check_handler, method_not_allowed_handler};
pub use home::home_handler;
