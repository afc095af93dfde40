//! Authentication pages

use askama::Template;

use crate::handlers::page::PageContext;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    /// Echoed back after a failed attempt
    pub username: String,
}
