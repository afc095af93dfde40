use askama::Template;

use crate::{handlers::page::PageContext, services::RosterTotals};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageContext,
    pub totals: RosterTotals,
}
