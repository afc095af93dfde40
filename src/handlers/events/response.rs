use askama::Template;

use crate::{
    handlers::page::{PageContext, SelectOption},
    models::Event,
};

#[derive(Template)]
#[template(path = "list_events.html")]
pub struct ListEventsTemplate {
    pub page: PageContext,
    pub events: Vec<Event>,
    pub sex_options: Vec<SelectOption>,
    pub grade_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
}
