//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod athlete;
pub mod common;
pub mod event;
pub mod result;
pub mod session;
pub mod user;

pub use athlete::*;
pub use common::*;
pub use event::*;
pub use result::*;
pub use session::*;
pub use user::*;
