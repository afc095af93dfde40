//! Utility functions

pub mod cookie;
pub mod crypto;
pub mod validation;

pub use cookie::{build_cookie, expire_cookie, read_cookie};
pub use crypto::{generate_secure_token, hash_string};
pub use validation::{non_empty, parse_result_value};
