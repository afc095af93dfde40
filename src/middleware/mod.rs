//! HTTP middleware

pub mod auth;
pub mod flash;
pub mod logging;

pub use auth::{CurrentUser, require_admin, require_login, session_middleware};
pub use flash::{Flash, FlashMessage, flash_middleware, redirect_with_flash};
pub use logging::logging_middleware;
