use askama::Template;

use crate::{
    handlers::page::{PageContext, SelectOption},
    models::Athlete,
};

#[derive(Template)]
#[template(path = "list_athletes.html")]
pub struct ListAthletesTemplate {
    pub page: PageContext,
    pub athletes: Vec<Athlete>,
    pub house_options: Vec<SelectOption>,
    pub sex_options: Vec<SelectOption>,
    pub grade_options: Vec<SelectOption>,
}
