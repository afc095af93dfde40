//! Authentication form DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH};

/// Login form submission
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = MAX_PASSWORD_LENGTH))]
    pub password: String,
}
